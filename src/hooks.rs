use log::{info, warn};
use yew::prelude::*;

use crate::scroll::{ScrollObservation, ScrollSubscription, ScrollTracker};
use crate::theme::{BrowserStorage, ColorSchemeQuery, DisplayMode, ThemeController};

/// Current display mode plus a callback flipping it. The controller is built
/// once, on first render.
#[hook]
pub fn use_display_mode() -> (DisplayMode, Callback<MouseEvent>) {
    let theme = use_state(|| ThemeController::initialize(BrowserStorage, &ColorSchemeQuery));

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*theme).clone();
            let mode = next.toggle();
            info!("Display mode switched to {}", mode.as_str());
            theme.set(next);
        })
    };

    (theme.mode(), toggle)
}

/// Tracks the active section and the scrolled flag for as long as the calling
/// component is mounted.
#[hook]
pub fn use_scroll_tracker() -> UseReducerHandle<ScrollTracker> {
    let tracker = use_reducer(ScrollTracker::default);

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |_| {
                // Pick up a restored scroll position before the first signal.
                if let Some(observation) = ScrollObservation::from_window() {
                    dispatcher.dispatch(observation);
                }

                let subscription = ScrollSubscription::on_window(move || {
                    if let Some(observation) = ScrollObservation::from_window() {
                        dispatcher.dispatch(observation);
                    }
                });
                if subscription.is_none() {
                    warn!("No window to listen for scroll on");
                }

                move || drop(subscription)
            },
            (),
        );
    }

    tracker
}
