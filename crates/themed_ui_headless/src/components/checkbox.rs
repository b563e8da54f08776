use once_cell::sync::Lazy;

use crate::controlled::{Controlled, Notifier};
use crate::style::{props, resolve, StyleMap};
use crate::theme::Theme;

static CONTAINER_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::FLEX_DIRECTION, "row")
        .with(props::ALIGN_ITEMS, "center")
        .with(props::CURSOR, "pointer")
});

static BOX_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::BORDER_WIDTH, 2)
        .with(props::BORDER_STYLE, "solid")
        .with(props::BORDER_RADIUS, 4)
        .with(props::BOX_SIZING, "border-box")
});

static LABEL_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::MARGIN_LEFT, 8)
        .with(props::FONT_SIZE, 16)
});

/// Configuration of a labelled checkbox.
#[derive(Debug, Clone)]
pub struct CheckboxProps {
    field: Controlled<bool>,
    label: Option<String>,
    size: f32,
    color: String,
    label_color: String,
    disabled_opacity: f32,
    style: Option<StyleMap>,
}

/// Resolved checkbox ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxView {
    /// Host-supplied checked flag.
    pub checked: bool,
    /// Whether taps are ignored.
    pub disabled: bool,
    /// Style of the row wrapping box and label.
    pub container: StyleMap,
    /// Style of the square box.
    pub check_box: StyleMap,
    /// Label text and style, when a non-empty label was given.
    pub label: Option<(String, StyleMap)>,
}

impl CheckboxProps {
    /// Checkbox with the default theme.
    pub fn new(checked: bool, on_change: impl Into<Notifier<bool>>) -> Self {
        Self::themed(&Theme::default(), checked, on_change)
    }

    /// Checkbox with defaults taken from `theme`.
    pub fn themed(theme: &Theme, checked: bool, on_change: impl Into<Notifier<bool>>) -> Self {
        Self {
            field: Controlled::new(checked, on_change),
            label: None,
            size: 24.0,
            color: theme.accent.clone(),
            label_color: theme.text.clone(),
            disabled_opacity: theme.disabled_opacity,
            style: None,
        }
    }

    /// Sets the label shown next to the box.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the box edge length in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the border and fill colour.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the label colour.
    pub fn label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = color.into();
        self
    }

    /// Disables the checkbox.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.field = self.field.disabled(disabled);
        self
    }

    /// Sets the per-instance style override for the container.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Host-supplied checked flag.
    pub fn checked(&self) -> bool {
        *self.field.value()
    }

    /// Resolves the view from the host-supplied flag.
    pub fn render(&self) -> CheckboxView {
        let checked = self.checked();
        let disabled = self.field.is_disabled();

        let outline = StyleMap::new()
            .with(props::WIDTH, self.size)
            .with(props::HEIGHT, self.size)
            .with(props::BORDER_COLOR, self.color.as_str());
        let fill = StyleMap::new().with(props::BACKGROUND_COLOR, self.color.as_str());
        let dimmed = StyleMap::new().with(props::OPACITY, self.disabled_opacity);
        let caption = StyleMap::new().with(props::COLOR, self.label_color.as_str());

        CheckboxView {
            checked,
            disabled,
            container: resolve(
                &CONTAINER_BASE,
                [disabled.then_some(&dimmed)],
                self.style.as_ref(),
            ),
            check_box: resolve(&BOX_BASE, [Some(&outline), checked.then_some(&fill)], None),
            label: self
                .label
                .as_ref()
                .filter(|label| !label.is_empty())
                .map(|label| (label.clone(), resolve(&LABEL_BASE, [Some(&caption)], None))),
        }
    }

    /// Handles a tap by proposing the inverse of the host-supplied flag.
    pub fn tap(&self) -> bool {
        self.field.propose(!self.checked())
    }
}
