use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Dark,
    Light,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Dark => "dark",
            DisplayMode::Light => "light",
        }
    }

    /// Decodes a persisted value. Anything non-empty other than `"dark"`
    /// reads as light; an empty value counts as no preference at all.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(DisplayMode::Dark),
            _ => Some(DisplayMode::Light),
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Dark => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("no window available")]
    NoWindow,
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Where the display mode preference is kept between visits.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under [`config::THEME_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, StorageError> {
        let window = window().ok_or(StorageError::NoWindow)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_err(e)))?
            .ok_or_else(|| StorageError::Unavailable("not provided by the browser".to_string()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(config::THEME_STORAGE_KEY)
            .map_err(|e| StorageError::Read(js_err(e)))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(config::THEME_STORAGE_KEY, value)
            .map_err(|e| StorageError::Write(js_err(e)))
    }
}

/// The platform's default color scheme, consulted only when nothing is stored.
pub trait AmbientPreference {
    fn prefers_dark(&self) -> bool;
}

impl AmbientPreference for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorSchemeQuery;

impl AmbientPreference for ColorSchemeQuery {
    fn prefers_dark(&self) -> bool {
        // Without matchMedia the page keeps its dark first paint.
        window()
            .and_then(|w| w.match_media(config::PREFERS_DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeController<S> {
    mode: DisplayMode,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Picks the starting mode: a stored preference wins, the ambient one
    /// fills in when nothing usable is stored or storage can't be read.
    pub fn initialize(store: S, ambient: &impl AmbientPreference) -> Self {
        let stored = match store.load() {
            Ok(value) => value.as_deref().and_then(DisplayMode::from_stored),
            Err(err) => {
                debug!("Theme preference unreadable, falling back to ambient: {}", err);
                None
            }
        };
        let mode = stored.unwrap_or_else(|| DisplayMode::from_prefers_dark(ambient.prefers_dark()));
        debug!("Initial display mode: {}", mode.as_str());
        Self { mode, store }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Flips the mode and persists it. A failed write leaves the new mode in
    /// place.
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        if let Err(err) = self.store.save(self.mode.as_str()) {
            warn!("Could not persist display mode: {}", err);
        }
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            let store = Self::default();
            *store.value.borrow_mut() = Some(value.to_string());
            store
        }

        fn stored(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Read("SecurityError".to_string()));
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("QuotaExceededError".to_string()));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn ambient_dark_applies_without_stored_preference() {
        let theme = ThemeController::initialize(MemoryStore::default(), &true);
        assert_eq!(theme.mode(), DisplayMode::Dark);
    }

    #[test]
    fn ambient_light_applies_without_stored_preference() {
        let theme = ThemeController::initialize(MemoryStore::default(), &false);
        assert_eq!(theme.mode(), DisplayMode::Light);
    }

    #[test]
    fn stored_light_beats_ambient_dark() {
        let theme = ThemeController::initialize(MemoryStore::with("light"), &true);
        assert_eq!(theme.mode(), DisplayMode::Light);
    }

    #[test]
    fn stored_dark_beats_ambient_light() {
        let theme = ThemeController::initialize(MemoryStore::with("dark"), &false);
        assert_eq!(theme.mode(), DisplayMode::Dark);
    }

    #[test]
    fn empty_stored_value_defers_to_ambient() {
        let theme = ThemeController::initialize(MemoryStore::with(""), &true);
        assert_eq!(theme.mode(), DisplayMode::Dark);
    }

    #[test]
    fn unrecognized_stored_value_reads_as_light() {
        let theme = ThemeController::initialize(MemoryStore::with("sepia"), &true);
        assert_eq!(theme.mode(), DisplayMode::Light);
    }

    #[test]
    fn unreadable_storage_counts_as_absent() {
        let store = MemoryStore {
            fail_reads: true,
            ..MemoryStore::with("light")
        };
        let theme = ThemeController::initialize(store, &true);
        assert_eq!(theme.mode(), DisplayMode::Dark);
    }

    #[test]
    fn toggle_persists_new_mode() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::initialize(store.clone(), &true);

        assert_eq!(theme.toggle(), DisplayMode::Light);
        assert_eq!(store.stored().as_deref(), Some("light"));

        assert_eq!(theme.toggle(), DisplayMode::Dark);
        assert_eq!(store.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_mode_and_stored_value() {
        let store = MemoryStore::with("light");
        let mut theme = ThemeController::initialize(store.clone(), &true);
        let original = theme.mode();

        theme.toggle();
        theme.toggle();

        assert_eq!(theme.mode(), original);
        assert_eq!(store.stored().as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_keeps_toggled_mode() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::with("dark")
        };
        let mut theme = ThemeController::initialize(store.clone(), &false);

        assert_eq!(theme.toggle(), DisplayMode::Light);
        assert_eq!(theme.mode(), DisplayMode::Light);
        assert_eq!(store.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn stored_encoding_is_the_literal_mode_name() {
        assert_eq!(DisplayMode::Dark.as_str(), "dark");
        assert_eq!(DisplayMode::Light.as_str(), "light");
        assert_eq!(DisplayMode::from_stored("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::from_stored("light"), Some(DisplayMode::Light));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear() {
        if let Ok(storage) = BrowserStorage::storage() {
            let _ = storage.remove_item(config::THEME_STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn local_storage_round_trips_preference() {
        clear();
        assert_eq!(BrowserStorage.load(), Ok(None));

        BrowserStorage.save("light").expect("localStorage writable");
        assert_eq!(BrowserStorage.load(), Ok(Some("light".to_string())));

        let theme = ThemeController::initialize(BrowserStorage, &true);
        assert_eq!(theme.mode(), DisplayMode::Light);
        clear();
    }
}
