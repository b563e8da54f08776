//! Leptos rendering of the themed UI primitives.
//!
//! Every component here is a thin view over a render model from `themed_ui_headless`: the
//! headless crate resolves styles and owns the gesture semantics, this crate emits the DOM,
//! the resolved inline style and the stable `data-ui-*` attributes. Values are controlled by
//! the host; components only report proposed changes through their callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod theme;

pub use primitives::{Button, Checkbox, Dialog, Overlay, Picker, Spinner, TextField};
pub use theme::{provide_theme, use_theme, ThemeProvider};
pub use themed_ui_headless::components::{KeyboardType, SpinnerSize};
pub use themed_ui_headless::{props, Dimension, SelectOption, StyleMap, Theme};

/// Convenience imports for host applications.
pub mod prelude {
    pub use crate::{
        props, provide_theme, use_theme, Button, Checkbox, Dialog, Dimension, KeyboardType,
        Overlay, Picker, SelectOption, Spinner, SpinnerSize, StyleMap, TextField, Theme,
        ThemeProvider,
    };
}
