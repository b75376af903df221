use log::Level;

pub const BRAND_PRIMARY: &str = "ENCON";
pub const BRAND_SECONDARY: &str = "-TECH";
pub const BRAND_NAME: &str = "Encon-Tech";

/// localStorage key holding the persisted display mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Distance from the viewport top (just under the fixed nav) a section has to
/// straddle to count as the active one.
pub const TRIGGER_OFFSET: f64 = 150.0;

/// Scroll offset after which the nav gets its glass background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
