use once_cell::sync::Lazy;

use crate::controlled::{Notifier, Pressable};
use crate::style::{props, resolve, Dimension, StyleMap};
use crate::theme::Theme;

static CONTAINER_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::JUSTIFY_CONTENT, "center")
        .with(props::ALIGN_ITEMS, "center")
        .with(props::BORDER_STYLE, "none")
        .with(props::BOX_SIZING, "border-box")
        .with(props::CURSOR, "pointer")
});

static LABEL_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::FONT_WEIGHT, "600")
        .with(props::FONT_SIZE, 16)
});

/// Transient interaction state reported by the renderer for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonInteraction {
    /// Pointer or touch is currently held down on the button.
    pub pressed: bool,
}

/// Configuration of a press button.
#[derive(Debug, Clone)]
pub struct ButtonProps {
    title: String,
    control: Pressable,
    width: Dimension,
    height: Dimension,
    background_color: String,
    pressed_color: String,
    text_color: String,
    border_radius: f32,
    disabled_opacity: f32,
    style: Option<StyleMap>,
}

/// Resolved button ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    /// Caption text.
    pub title: String,
    /// Style of the pressable container.
    pub container: StyleMap,
    /// Style of the caption.
    pub label: StyleMap,
    /// Whether presses are ignored.
    pub disabled: bool,
}

impl ButtonProps {
    /// Button with the default theme.
    pub fn new(title: impl Into<String>, on_press: impl Into<Notifier<()>>) -> Self {
        Self::themed(&Theme::default(), title, on_press)
    }

    /// Button with defaults taken from `theme`.
    pub fn themed(
        theme: &Theme,
        title: impl Into<String>,
        on_press: impl Into<Notifier<()>>,
    ) -> Self {
        Self {
            title: title.into(),
            control: Pressable::new(on_press),
            width: Dimension::Px(theme.control_width),
            height: Dimension::Px(theme.control_height),
            background_color: theme.accent.clone(),
            pressed_color: theme.accent_pressed.clone(),
            text_color: theme.on_accent.clone(),
            border_radius: theme.button_radius,
            disabled_opacity: theme.disabled_opacity,
            style: None,
        }
    }

    /// Sets the width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the resting background colour.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the background colour used while pressed.
    pub fn pressed_color(mut self, color: impl Into<String>) -> Self {
        self.pressed_color = color.into();
        self
    }

    /// Sets the caption colour.
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Sets the corner radius.
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Disables the button.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.control = self.control.disabled(disabled);
        self
    }

    /// Sets the per-instance style override for the container.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Whether the button ignores presses.
    pub fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }

    /// Resolves the view for the given interaction state.
    pub fn render(&self, interaction: ButtonInteraction) -> ButtonView {
        let disabled = self.is_disabled();
        let pressed = interaction.pressed && !disabled;

        let metrics = StyleMap::new()
            .with(props::WIDTH, self.width)
            .with(props::HEIGHT, self.height)
            .with(props::BORDER_RADIUS, self.border_radius);
        let fill = StyleMap::new().with(
            props::BACKGROUND_COLOR,
            if pressed {
                self.pressed_color.as_str()
            } else {
                self.background_color.as_str()
            },
        );
        let opacity = StyleMap::new().with(
            props::OPACITY,
            if disabled { self.disabled_opacity } else { 1.0 },
        );
        let caption = StyleMap::new().with(props::COLOR, self.text_color.as_str());

        ButtonView {
            title: self.title.clone(),
            container: resolve(
                &CONTAINER_BASE,
                [Some(&metrics), Some(&fill), Some(&opacity)],
                self.style.as_ref(),
            ),
            label: resolve(&LABEL_BASE, [Some(&caption)], None),
            disabled,
        }
    }

    /// Handles a completed tap. Returns whether `on_press` fired.
    pub fn press(&self) -> bool {
        self.control.press()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controlled::testing::recorder;

    #[test]
    fn defaults_match_the_house_style() {
        let (on_press, _) = recorder::<()>();
        let view = ButtonProps::new("Save", on_press).render(ButtonInteraction::default());

        assert_eq!(view.container.number(props::WIDTH), Some(200.0));
        assert_eq!(view.container.number(props::HEIGHT), Some(44.0));
        assert_eq!(view.container.number(props::BORDER_RADIUS), Some(9.0));
        assert_eq!(view.container.text(props::BACKGROUND_COLOR), Some("#F3971D"));
        assert_eq!(view.container.number(props::OPACITY), Some(1.0));
        assert_eq!(view.label.text(props::COLOR), Some("white"));
        assert_eq!(view.label.text(props::FONT_WEIGHT), Some("600"));
    }

    #[test]
    fn pressed_state_swaps_background() {
        let (on_press, _) = recorder::<()>();
        let view = ButtonProps::new("Save", on_press)
            .pressed_color("navy")
            .render(ButtonInteraction { pressed: true });
        assert_eq!(view.container.text(props::BACKGROUND_COLOR), Some("navy"));
    }

    #[test]
    fn disabled_button_ignores_taps() {
        let (on_press, calls) = recorder::<()>();
        let button = ButtonProps::new("Save", on_press).disabled(true);

        assert!(!button.press());
        assert!(calls.borrow().is_empty());

        let view = button.render(ButtonInteraction { pressed: true });
        assert_eq!(view.container.number(props::OPACITY), Some(0.6));
        assert_eq!(view.container.text(props::BACKGROUND_COLOR), Some("#F3971D"));
    }

    #[test]
    fn enabled_button_notifies_once_per_tap() {
        let (on_press, calls) = recorder::<()>();
        let button = ButtonProps::new("Save", on_press);
        assert!(button.press());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn style_override_wins_over_state_fragments() {
        let (on_press, _) = recorder::<()>();
        let view = ButtonProps::new("Save", on_press)
            .width(Dimension::Percent(100.0))
            .style(StyleMap::new().with(props::BACKGROUND_COLOR, "black"))
            .render(ButtonInteraction { pressed: true });

        assert_eq!(view.container.text(props::BACKGROUND_COLOR), Some("black"));
        assert_eq!(view.container.text(props::WIDTH), Some("100%"));
    }
}
