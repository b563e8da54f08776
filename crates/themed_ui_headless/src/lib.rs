//! Headless core of the themed UI primitives.
//!
//! This crate is renderer-agnostic. It owns the style merge used by every component, the
//! controlled-value contract, the stateless overlay primitive, the picker state machine and
//! the resolved render models of button, checkbox, text field, spinner, dialog and picker.
//! Rendering crates translate those models into real views and feed gestures back in.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod controlled;
pub mod overlay;
pub mod picker;
pub mod style;
pub mod theme;

pub use controlled::{Controlled, Notifier, Pressable};
pub use overlay::{HitRegion, OverlayFrame};
pub use picker::{OverlayState, PickerGesture, PickerMachine, SelectOption, Transition};
pub use style::{props, resolve, Dimension, StyleMap, StyleValue};
pub use theme::{Theme, ThemeError};
