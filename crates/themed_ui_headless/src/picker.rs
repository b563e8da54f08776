//! Single-select picker state machine.
//!
//! The machine holds only whether its overlay is shown. The selected value lives with the
//! host; a row tap is turned into one change notification plus a close.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::controlled::Notifier;

/// One selectable entry. `value` is the identity and equality key, `label` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<V> {
    /// Value proposed to the host when this option is chosen.
    pub value: V,
    /// Text shown in the list and in the closed summary.
    pub label: String,
}

impl<V> SelectOption<V> {
    /// Creates an option.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Whether the picker's overlay is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayState {
    /// Only the summary control is rendered.
    #[default]
    Closed,
    /// The option list is rendered in an overlay.
    Open,
}

impl OverlayState {
    /// Stable token used in rendered markup.
    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// User gestures the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerGesture {
    /// Tap on the closed summary control.
    TriggerTap,
    /// Tap on the overlay backdrop outside the list.
    BackdropTap,
    /// Tap on the row at this position of the option sequence.
    OptionTap(usize),
}

/// Result of feeding one gesture to the machine.
#[derive(Debug, PartialEq)]
pub struct Transition<'a, V> {
    /// State before the gesture.
    pub from: OverlayState,
    /// State after the gesture.
    pub to: OverlayState,
    /// Value to propose to the host, if the gesture chose an option.
    pub selected: Option<&'a V>,
}

impl<V> Transition<'_, V> {
    /// Whether the gesture changed nothing.
    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.selected.is_none()
    }
}

/// Computes the outcome of `gesture` in `state` without side effects.
///
/// Pairs not listed below leave the state unchanged and select nothing:
///
/// | from   | gesture          | to     | selected            |
/// |--------|------------------|--------|---------------------|
/// | Closed | `TriggerTap`     | Open   | –                   |
/// | Open   | `BackdropTap`    | Closed | –                   |
/// | Open   | `OptionTap(i)`   | Closed | `options[i].value`  |
pub fn transition<V>(
    state: OverlayState,
    gesture: PickerGesture,
    options: &[SelectOption<V>],
) -> Transition<'_, V> {
    let (to, selected) = match (state, gesture) {
        (OverlayState::Closed, PickerGesture::TriggerTap) => (OverlayState::Open, None),
        (OverlayState::Open, PickerGesture::BackdropTap) => (OverlayState::Closed, None),
        (OverlayState::Open, PickerGesture::OptionTap(index)) => match options.get(index) {
            Some(option) => (OverlayState::Closed, Some(&option.value)),
            None => {
                tracing::warn!(index, len = options.len(), "option tap outside the list");
                (state, None)
            }
        },
        _ => (state, None),
    };
    Transition {
        from: state,
        to,
        selected,
    }
}

/// Owned overlay flag plus the transition rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerMachine {
    state: OverlayState,
}

impl PickerMachine {
    /// A closed machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overlay state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Stores the state `gesture` leads to and returns the value an option tap selected.
    ///
    /// The caller notifies the host with the returned value once the new state is visible,
    /// so a host callback that dispatches again starts from the post-transition state.
    pub fn apply<V: Clone + fmt::Debug>(
        &mut self,
        gesture: PickerGesture,
        options: &[SelectOption<V>],
    ) -> Option<V> {
        let step = transition(self.state, gesture, options);
        if step.is_noop() {
            return None;
        }
        tracing::debug!(
            from = step.from.token(),
            to = step.to.token(),
            selected = ?step.selected,
            "picker transition"
        );
        self.state = step.to;
        step.selected.cloned()
    }

    /// Applies `gesture`, storing the new state before notifying the host.
    ///
    /// `on_change` fires at most once, and only for an option tap while open.
    pub fn dispatch<V: Clone + fmt::Debug>(
        &mut self,
        gesture: PickerGesture,
        options: &[SelectOption<V>],
        on_change: &Notifier<V>,
    ) -> OverlayState {
        if let Some(value) = self.apply(gesture, options) {
            on_change.notify(value);
        }
        self.state
    }
}

/// First option whose value equals `selected`.
pub fn selected_option<'a, V: PartialEq>(
    options: &'a [SelectOption<V>],
    selected: Option<&V>,
) -> Option<&'a SelectOption<V>> {
    let selected = selected?;
    options.iter().find(|option| option.value == *selected)
}

/// Label of the selected option, or `placeholder` when the selection is absent or stale.
pub fn display_label<'a, V: PartialEq>(
    options: &'a [SelectOption<V>],
    selected: Option<&V>,
    placeholder: &'a str,
) -> &'a str {
    selected_option(options, selected)
        .map(|option| option.label.as_str())
        .unwrap_or(placeholder)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::controlled::testing::recorder;

    fn ab() -> Vec<SelectOption<i32>> {
        vec![SelectOption::new(1, "A"), SelectOption::new(2, "B")]
    }

    #[test]
    fn label_of_selected_value() {
        assert_eq!(display_label(&ab(), Some(&2), "Select..."), "B");
    }

    #[test]
    fn placeholder_when_nothing_or_stale_selected() {
        assert_eq!(display_label(&ab(), None, "Select..."), "Select...");
        assert_eq!(display_label(&ab(), Some(&9), "Select..."), "Select...");
        assert_eq!(display_label::<i32>(&[], None, "Select..."), "Select...");
    }

    #[test]
    fn duplicate_values_resolve_to_first() {
        let options = vec![
            SelectOption::new("x", "first"),
            SelectOption::new("x", "second"),
        ];
        assert_eq!(display_label(&options, Some(&"x"), "-"), "first");
    }

    #[test]
    fn trigger_opens_and_backdrop_closes_without_notifying() {
        let (on_change, calls) = recorder::<i32>();
        let mut machine = PickerMachine::new();

        assert_eq!(
            machine.dispatch(PickerGesture::TriggerTap, &ab(), &on_change),
            OverlayState::Open
        );
        assert_eq!(
            machine.dispatch(PickerGesture::BackdropTap, &ab(), &on_change),
            OverlayState::Closed
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn option_tap_notifies_once_and_closes() {
        let (on_change, calls) = recorder::<i32>();
        let mut machine = PickerMachine::new();
        machine.dispatch(PickerGesture::TriggerTap, &ab(), &on_change);

        let state = machine.dispatch(PickerGesture::OptionTap(0), &ab(), &on_change);

        assert_eq!(state, OverlayState::Closed);
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn gestures_outside_their_state_are_ignored() {
        let (on_change, calls) = recorder::<i32>();
        let mut machine = PickerMachine::new();

        machine.dispatch(PickerGesture::OptionTap(0), &ab(), &on_change);
        machine.dispatch(PickerGesture::BackdropTap, &ab(), &on_change);
        assert_eq!(machine.state(), OverlayState::Closed);

        machine.dispatch(PickerGesture::TriggerTap, &ab(), &on_change);
        machine.dispatch(PickerGesture::TriggerTap, &ab(), &on_change);
        machine.dispatch(PickerGesture::OptionTap(7), &ab(), &on_change);
        assert_eq!(machine.state(), OverlayState::Open);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn empty_list_still_opens_and_closes() {
        let (on_change, calls) = recorder::<i32>();
        let mut machine = PickerMachine::new();

        machine.dispatch(PickerGesture::TriggerTap, &[], &on_change);
        assert!(machine.is_open());
        machine.dispatch(PickerGesture::BackdropTap, &[], &on_change);
        assert!(!machine.is_open());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn apply_stores_closed_before_returning_selection() {
        let mut machine = PickerMachine::new();
        assert_eq!(machine.apply(PickerGesture::TriggerTap, &ab()), None);

        let selected = machine.apply(PickerGesture::OptionTap(1), &ab());
        assert_eq!(selected, Some(2));
        assert_eq!(machine.state(), OverlayState::Closed);
        assert_eq!(machine.apply(PickerGesture::OptionTap(1), &ab()), None);
    }

    #[test]
    fn machine_is_reusable() {
        let (on_change, calls) = recorder::<i32>();
        let mut machine = PickerMachine::new();
        for index in [1, 0, 1] {
            machine.dispatch(PickerGesture::TriggerTap, &ab(), &on_change);
            machine.dispatch(PickerGesture::OptionTap(index), &ab(), &on_change);
        }
        assert_eq!(*calls.borrow(), vec![2, 1, 2]);
        assert_eq!(machine.state(), OverlayState::Closed);
    }

    proptest! {
        #[test]
        fn row_tap_proposes_that_rows_value(
            values in prop::collection::vec(any::<i16>(), 1..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let options: Vec<_> = values
                .iter()
                .map(|value| SelectOption::new(*value, value.to_string()))
                .collect();
            let index = pick.index(options.len());
            let (on_change, calls) = recorder::<i16>();
            let mut machine = PickerMachine::new();

            machine.dispatch(PickerGesture::TriggerTap, &options, &on_change);
            let state = machine.dispatch(PickerGesture::OptionTap(index), &options, &on_change);

            prop_assert_eq!(state, OverlayState::Closed);
            prop_assert_eq!(calls.borrow().clone(), vec![values[index]]);
        }

        #[test]
        fn label_matches_first_equal_value(
            values in prop::collection::vec(0u8..6, 0..10),
            selected in proptest::option::of(0u8..8),
        ) {
            let options: Vec<_> = values
                .iter()
                .enumerate()
                .map(|(i, value)| SelectOption::new(*value, format!("row-{i}")))
                .collect();
            let expected = selected
                .and_then(|wanted| values.iter().position(|value| *value == wanted))
                .map(|i| format!("row-{i}"))
                .unwrap_or_else(|| "placeholder".to_string());

            prop_assert_eq!(
                display_label(&options, selected.as_ref(), "placeholder"),
                expected.as_str()
            );
        }
    }
}
