//! Control and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;
use themed_ui_headless::Notifier;

mod controls;
mod overlays;

pub use controls::{Button, Checkbox, Spinner, TextField};
pub use overlays::{Dialog, Overlay, Picker};

/// Bridges an optional Leptos callback into the headless notifier contract.
pub(crate) fn notifier<T: 'static>(callback: Option<Callback<T>>) -> Notifier<T> {
    Notifier::new(move |value| {
        if let Some(callback) = callback {
            callback.call(value);
        }
    })
}

/// Applies a builder setter only when the optional prop was supplied.
pub(crate) fn apply_some<B, T: Clone>(
    builder: B,
    value: &Option<T>,
    set: impl FnOnce(B, T) -> B,
) -> B {
    match value {
        Some(value) => set(builder, value.clone()),
        None => builder,
    }
}

/// Whether a click landed on the element carrying the handler rather than on a descendant.
pub(crate) fn is_backdrop_hit(ev: &MouseEvent) -> bool {
    let target = ev.target();
    target.is_some() && target == ev.current_target()
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_some_skips_missing_values() {
        let applied = apply_some(String::from("a"), &Some('b'), |mut s, c| {
            s.push(c);
            s
        });
        let skipped = apply_some(String::from("a"), &None::<char>, |mut s, c| {
            s.push(c);
            s
        });
        assert_eq!(applied, "ab");
        assert_eq!(skipped, "a");
    }

    #[test]
    fn bool_tokens_are_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
