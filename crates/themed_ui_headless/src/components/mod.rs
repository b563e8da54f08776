//! Headless render models of the themed components.
//!
//! Each component takes its host-owned value and change callback through a props builder,
//! resolves base style, state fragments and the caller's `style` override into plain
//! [`StyleMap`](crate::StyleMap)s, and exposes the gesture handlers the renderer wires to
//! real events.

mod button;
mod checkbox;
mod dialog;
mod picker;
mod spinner;
mod text_field;

pub use button::{ButtonInteraction, ButtonProps, ButtonView};
pub use checkbox::{CheckboxProps, CheckboxView};
pub use dialog::{DialogBody, DialogProps, CLOSE_LABEL};
pub use picker::{
    OptionList, OptionRow, Picker, PickerProps, PickerSummary, PickerView, DEFAULT_PLACEHOLDER,
};
pub use spinner::{SpinnerProps, SpinnerSize, SpinnerView};
pub use text_field::{KeyboardType, TextFieldProps, TextFieldView};
