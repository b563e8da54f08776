use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::style::{props, resolve, StyleMap};
use crate::theme::Theme;

static CONTAINER_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::JUSTIFY_CONTENT, "center")
        .with(props::ALIGN_ITEMS, "center")
});

static INDICATOR_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::BORDER_STYLE, "solid")
        .with(props::BORDER_WIDTH, 3)
        .with(props::BORDER_RADIUS, "50%")
        .with(props::BOX_SIZING, "border-box")
        .with(props::ANIMATION, "ui-spin 0.8s linear infinite")
});

/// Indicator size presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinnerSize {
    /// 20px indicator.
    Small,
    /// 36px indicator.
    #[default]
    Large,
}

impl SpinnerSize {
    /// Edge length in pixels.
    pub fn px(self) -> f32 {
        match self {
            Self::Small => 20.0,
            Self::Large => 36.0,
        }
    }

    /// Stable token used in rendered markup.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Configuration of a loading indicator.
#[derive(Debug, Clone)]
pub struct SpinnerProps {
    size: SpinnerSize,
    color: String,
    style: Option<StyleMap>,
}

/// Resolved spinner ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerView {
    /// Requested preset.
    pub size: SpinnerSize,
    /// Style of the centring container.
    pub container: StyleMap,
    /// Style of the spinning ring.
    pub indicator: StyleMap,
}

impl Default for SpinnerProps {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

impl SpinnerProps {
    /// Spinner with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spinner with its colour taken from `theme`.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            size: SpinnerSize::Large,
            color: theme.accent.clone(),
            style: None,
        }
    }

    /// Sets the size preset.
    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the ring colour.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the per-instance style override for the container.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the view.
    pub fn render(&self) -> SpinnerView {
        let ring = StyleMap::new()
            .with(props::WIDTH, self.size.px())
            .with(props::HEIGHT, self.size.px())
            .with(props::BORDER_COLOR, self.color.as_str());
        // Must follow border-color in the resolved order.
        let gap = StyleMap::new().with(props::BORDER_TOP_COLOR, "transparent");

        SpinnerView {
            size: self.size,
            container: resolve(&CONTAINER_BASE, [None], self.style.as_ref()),
            indicator: resolve(&INDICATOR_BASE, [Some(&ring), Some(&gap)], None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_accent_ring_by_default() {
        let view = SpinnerProps::new().render();
        assert_eq!(view.size, SpinnerSize::Large);
        assert_eq!(view.indicator.number(props::WIDTH), Some(36.0));
        assert_eq!(view.indicator.text(props::BORDER_COLOR), Some("#F3971D"));
    }

    #[test]
    fn small_preset_and_colour_override() {
        let view = SpinnerProps::new()
            .size(SpinnerSize::Small)
            .color("blue")
            .style(StyleMap::new().with(props::PADDING, 12))
            .render();
        assert_eq!(view.indicator.number(props::HEIGHT), Some(20.0));
        assert_eq!(view.indicator.text(props::BORDER_COLOR), Some("blue"));
        assert_eq!(view.container.number(props::PADDING), Some(12.0));
    }

    #[test]
    fn gap_survives_border_colour() {
        let css = SpinnerProps::new().render().indicator.to_css();
        let color_at = css.find("border-color").expect("border-color");
        let gap_at = css.find("border-top-color").expect("border-top-color");
        assert!(gap_at > color_at);
    }
}
