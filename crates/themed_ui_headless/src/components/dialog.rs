use once_cell::sync::Lazy;

use crate::controlled::Notifier;
use crate::overlay::{self, OverlayFrame};
use crate::style::{props, resolve, Dimension, StyleMap};
use crate::theme::Theme;

/// Caption of the close action.
pub const CLOSE_LABEL: &str = "Close";

static SURFACE_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::FLEX_DIRECTION, "column")
        .with(props::PADDING, 20)
        .with(props::BORDER_RADIUS, 10)
        .with(props::MAX_HEIGHT, "80vh")
        .with(props::BOX_SIZING, "border-box")
});

static TITLE_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::FONT_WEIGHT, "700")
        .with(props::FONT_SIZE, 18)
        .with(props::MARGIN_BOTTOM, 12)
});

static BODY_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::FLEX, 1)
        .with(props::OVERFLOW_Y, "auto")
});

static CLOSE_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::PADDING, 12)
        .with(props::BORDER_RADIUS, 8)
        .with(props::MARGIN_TOP, 15)
        .with(props::BORDER_STYLE, "none")
        .with(props::TEXT_ALIGN, "center")
        .with(props::CURSOR, "pointer")
});

/// Configuration of a modal dialog. Visibility is owned by the host.
#[derive(Debug, Clone)]
pub struct DialogProps {
    visible: bool,
    on_close: Notifier<()>,
    title: Option<String>,
    width: Dimension,
    height: Dimension,
    background_color: String,
    title_color: String,
    close_color: String,
    close_text_color: String,
    backdrop: String,
    style: Option<StyleMap>,
}

/// Content of a visible dialog, hosted inside an [`OverlayFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct DialogBody<C> {
    /// Style of the dialog surface.
    pub surface: StyleMap,
    /// Title text and style, when a non-empty title was given.
    pub title: Option<(String, StyleMap)>,
    /// Style of the region hosting `content`.
    pub body: StyleMap,
    /// Caller content.
    pub content: C,
    /// Style of the close action.
    pub close_button: StyleMap,
    /// Caption of the close action.
    pub close_label: &'static str,
}

impl DialogProps {
    /// Dialog with the default theme.
    pub fn new(visible: bool, on_close: impl Into<Notifier<()>>) -> Self {
        Self::themed(&Theme::default(), visible, on_close)
    }

    /// Dialog with defaults taken from `theme`.
    pub fn themed(theme: &Theme, visible: bool, on_close: impl Into<Notifier<()>>) -> Self {
        Self {
            visible,
            on_close: on_close.into(),
            title: None,
            width: Dimension::Percent(80.0),
            height: Dimension::Auto,
            background_color: theme.surface.clone(),
            title_color: theme.text.clone(),
            close_color: theme.accent.clone(),
            close_text_color: theme.on_accent.clone(),
            backdrop: theme.backdrop.clone(),
            style: None,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the surface width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the surface height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the surface colour.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the title colour.
    pub fn title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = color.into();
        self
    }

    /// Sets the per-instance style override for the surface.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Whether the host currently shows the dialog.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Renders the dialog through the overlay primitive.
    ///
    /// Backdrop and close-action taps on the returned frame notify `on_close`; the dialog
    /// stays visible until the host passes `visible = false`.
    pub fn render<C>(&self, content: impl FnOnce() -> C) -> Option<OverlayFrame<DialogBody<C>>> {
        overlay::render_tinted(&self.backdrop, self.visible, &self.on_close, || {
            let metrics = StyleMap::new()
                .with(props::WIDTH, self.width)
                .with(props::HEIGHT, self.height)
                .with(props::BACKGROUND_COLOR, self.background_color.as_str());
            let title_tint = StyleMap::new().with(props::COLOR, self.title_color.as_str());
            let close_tint = StyleMap::new()
                .with(props::BACKGROUND_COLOR, self.close_color.as_str())
                .with(props::COLOR, self.close_text_color.as_str());

            DialogBody {
                surface: resolve(&SURFACE_BASE, [Some(&metrics)], self.style.as_ref()),
                title: self
                    .title
                    .as_ref()
                    .filter(|title| !title.is_empty())
                    .map(|title| (title.clone(), resolve(&TITLE_BASE, [Some(&title_tint)], None))),
                body: BODY_BASE.clone(),
                content: content(),
                close_button: resolve(&CLOSE_BASE, [Some(&close_tint)], None),
                close_label: CLOSE_LABEL,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controlled::testing::recorder;
    use crate::overlay::HitRegion;

    #[test]
    fn hidden_dialog_renders_nothing() {
        let (on_close, _) = recorder::<()>();
        assert!(DialogProps::new(false, on_close).render(|| "body").is_none());
    }

    #[test]
    fn visible_dialog_hosts_content_and_title() {
        let (on_close, _) = recorder::<()>();
        let frame = DialogProps::new(true, on_close)
            .title("Confirm")
            .render(|| "Are you sure?")
            .expect("visible");
        let body = frame.content();

        assert_eq!(body.content, "Are you sure?");
        assert_eq!(body.title.as_ref().map(|(text, _)| text.as_str()), Some("Confirm"));
        assert_eq!(body.surface.text(props::WIDTH), Some("80%"));
        assert_eq!(body.surface.text(props::HEIGHT), Some("auto"));
        assert_eq!(body.close_label, "Close");
        assert_eq!(body.close_button.text(props::BACKGROUND_COLOR), Some("#F3971D"));
    }

    #[test]
    fn close_action_and_backdrop_notify_but_do_not_hide() {
        let (on_close, calls) = recorder::<()>();
        let dialog = DialogProps::new(true, on_close);
        let frame = dialog.render(|| ()).expect("visible");

        frame.tap(HitRegion::CloseAffordance);
        frame.tap(HitRegion::Backdrop);
        frame.tap(HitRegion::Content);

        assert_eq!(calls.borrow().len(), 2);
        assert!(dialog.is_visible());
    }

    #[test]
    fn surface_override_wins() {
        let (on_close, _) = recorder::<()>();
        let frame = DialogProps::new(true, on_close)
            .background_color("ivory")
            .style(StyleMap::new().with(props::BACKGROUND_COLOR, "black"))
            .render(|| ())
            .expect("visible");
        assert_eq!(frame.content().surface.text(props::BACKGROUND_COLOR), Some("black"));
    }

    #[test]
    fn dialog_frame_matches_the_shared_overlay_layer() {
        let (on_close, _) = recorder::<()>();
        let theme = Theme::default();
        let dialog = DialogProps::themed(&theme, true, on_close.clone())
            .render(|| ())
            .expect("visible");
        let layer = overlay::render_tinted(&theme.backdrop, true, &on_close, || ())
            .expect("visible");

        assert_eq!(dialog.backdrop_style(), layer.backdrop_style());
        assert_eq!(dialog.content_style(), layer.content_style());
    }
}
