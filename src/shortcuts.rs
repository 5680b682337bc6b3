//! ==============================================================================
//! shortcuts.rs - global keyboard shortcut dispatcher
//! ==============================================================================
//!
//! ctrl/cmd + 1-3 fetch the matching GET endpoint, ctrl/cmd + 4 fires the
//! echo POST. the listener is registered once at startup and kept for the
//! page lifetime.

use leptos::ev;
use leptos::prelude::*;

use crate::actions;
use crate::api;
use crate::display::Indicator;

/// what a recognized key combination triggers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShortcutAction {
    /// GET the endpoint table entry at this index
    Fetch(usize),
    /// POST the fixed echo message
    Echo,
}

/// map a keydown to an action. modifier is ctrl or cmd.
pub fn action_for(key: &str, modifier: bool) -> Option<ShortcutAction> {
    if !modifier {
        return None;
    }

    match key {
        "1" => Some(ShortcutAction::Fetch(0)),
        "2" => Some(ShortcutAction::Fetch(1)),
        "3" => Some(ShortcutAction::Fetch(2)),
        "4" => Some(ShortcutAction::Echo),
        _ => None,
    }
}

/// register the global keydown listener. deliberately never removed: the
/// shortcuts stay active until the page unloads.
pub fn register(set_text: WriteSignal<String>, set_indicator: WriteSignal<Indicator>) {
    let _handle = window_event_listener(ev::keydown, move |event| {
        let modifier = event.ctrl_key() || event.meta_key();
        if let Some(action) = action_for(&event.key(), modifier) {
            // keep the browser from acting on ctrl/cmd + digit
            // (tab switching binds the same combos)
            event.prevent_default();

            match action {
                ShortcutAction::Fetch(index) => {
                    if let Some(path) = api::ENDPOINTS.get(index).copied() {
                        actions::run_fetch(set_text, set_indicator, path);
                    }
                }
                ShortcutAction::Echo => actions::run_echo(set_text, set_indicator),
            }
        }
    });
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_endpoint_indices() {
        assert_eq!(action_for("1", true), Some(ShortcutAction::Fetch(0)));
        assert_eq!(action_for("2", true), Some(ShortcutAction::Fetch(1)));
        assert_eq!(action_for("3", true), Some(ShortcutAction::Fetch(2)));
    }

    #[test]
    fn test_digit_four_fires_echo() {
        assert_eq!(action_for("4", true), Some(ShortcutAction::Echo));
    }

    #[test]
    fn test_unmodified_digits_do_nothing() {
        for key in ["1", "2", "3", "4"] {
            assert_eq!(action_for(key, false), None);
        }
    }

    #[test]
    fn test_other_keys_do_nothing() {
        for key in ["0", "5", "9", "a", "Enter"] {
            assert_eq!(action_for(key, true), None);
        }
    }
}
