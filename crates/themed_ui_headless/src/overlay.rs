//! Stateless overlay primitive shared by the dialog and the picker.
//!
//! Visibility is owned by the caller. The overlay only reports the intent to close: a tap on
//! the backdrop or on an explicit close affordance invokes `on_close` once, and the caller
//! decides whether the next render is still visible.

use once_cell::sync::Lazy;

use crate::controlled::Notifier;
use crate::style::{props, resolve, StyleMap};
use crate::theme::Theme;

static BACKDROP_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::POSITION, "fixed")
        .with(props::INSET, 0)
        .with(props::Z_INDEX, 1000)
        .with(props::DISPLAY, "flex")
        .with(props::FLEX_DIRECTION, "column")
        .with(props::JUSTIFY_CONTENT, "center")
        .with(props::ALIGN_ITEMS, "center")
});

static CONTENT_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::POSITION, "relative")
        .with(props::DISPLAY, "flex")
        .with(props::FLEX_DIRECTION, "column")
        .with(props::ALIGN_ITEMS, "center")
        .with(props::ALIGN_SELF, "stretch")
        .with(props::MAX_WIDTH, "100%")
        .with(props::MAX_HEIGHT, "100%")
        .with(props::BOX_SIZING, "border-box")
});

/// Area of a visible overlay that received a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Anywhere on the backdrop outside the content area.
    Backdrop,
    /// Inside the content area.
    Content,
    /// An explicit close control rendered by the owner.
    CloseAffordance,
}

impl HitRegion {
    /// Whether a tap in this region requests dismissal.
    pub fn dismisses(self) -> bool {
        matches!(self, Self::Backdrop | Self::CloseAffordance)
    }

    /// Stable token used in rendered markup.
    pub fn token(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Content => "content",
            Self::CloseAffordance => "close",
        }
    }
}

/// A rendered, visible overlay.
#[derive(Debug, Clone)]
pub struct OverlayFrame<C> {
    backdrop: StyleMap,
    content_style: StyleMap,
    content: C,
    on_close: Notifier<()>,
}

impl<C> OverlayFrame<C> {
    /// Resolved backdrop style.
    pub fn backdrop_style(&self) -> &StyleMap {
        &self.backdrop
    }

    /// Resolved style of the area hosting the content. Taps inside it are `Content` hits.
    pub fn content_style(&self) -> &StyleMap {
        &self.content_style
    }

    /// Content hosted above the backdrop.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Consumes the frame, returning its content.
    pub fn into_content(self) -> C {
        self.content
    }

    /// Handles one tap gesture. Returns whether `on_close` was invoked.
    pub fn tap(&self, region: HitRegion) -> bool {
        if !region.dismisses() {
            return false;
        }
        tracing::debug!(region = region.token(), "overlay dismissal requested");
        self.on_close.notify(());
        true
    }
}

/// Renders `content` above the base hierarchy using the default theme's backdrop.
///
/// Returns `None` when not visible: nothing is drawn and no input is absorbed. `content` is
/// only built for a visible overlay.
pub fn render<C>(
    visible: bool,
    on_close: &Notifier<()>,
    content: impl FnOnce() -> C,
) -> Option<OverlayFrame<C>> {
    render_tinted(&Theme::default().backdrop, visible, on_close, content)
}

/// [`render`] with an explicit backdrop colour.
pub fn render_tinted<C>(
    backdrop_color: &str,
    visible: bool,
    on_close: &Notifier<()>,
    content: impl FnOnce() -> C,
) -> Option<OverlayFrame<C>> {
    if !visible {
        return None;
    }
    let tint = StyleMap::new().with(props::BACKGROUND_COLOR, backdrop_color);
    Some(OverlayFrame {
        backdrop: resolve(&BACKDROP_BASE, [Some(&tint)], None),
        content_style: (*CONTENT_BASE).clone(),
        content: content(),
        on_close: on_close.clone(),
    })
}
