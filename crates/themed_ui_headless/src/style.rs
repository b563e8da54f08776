//! Flat style maps and the ordered merge every component runs once per render.
//!
//! A component owns one immutable base [`StyleMap`] per slot, computes zero or more
//! state fragments from its current interaction state, and lets the caller supply a final
//! override. [`resolve`] folds them left to right; a later source replaces an earlier one
//! property by property and never merges nested values.

use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known property keys. Keys are CSS property names so a resolved map can be
/// emitted as an inline declaration without translation.
pub mod props {
    #![allow(missing_docs)]

    pub const ALIGN_ITEMS: &str = "align-items";
    pub const ALIGN_SELF: &str = "align-self";
    pub const ANIMATION: &str = "animation";
    pub const BACKGROUND_COLOR: &str = "background-color";
    pub const BORDER_BOTTOM_COLOR: &str = "border-bottom-color";
    pub const BORDER_BOTTOM_WIDTH: &str = "border-bottom-width";
    pub const BORDER_COLOR: &str = "border-color";
    pub const BORDER_RADIUS: &str = "border-radius";
    pub const BORDER_STYLE: &str = "border-style";
    pub const BORDER_TOP_COLOR: &str = "border-top-color";
    pub const BORDER_WIDTH: &str = "border-width";
    pub const BOX_SIZING: &str = "box-sizing";
    pub const COLOR: &str = "color";
    pub const CURSOR: &str = "cursor";
    pub const DISPLAY: &str = "display";
    pub const FLEX: &str = "flex";
    pub const FLEX_DIRECTION: &str = "flex-direction";
    pub const FONT_SIZE: &str = "font-size";
    pub const FONT_WEIGHT: &str = "font-weight";
    pub const HEIGHT: &str = "height";
    pub const INSET: &str = "inset";
    pub const JUSTIFY_CONTENT: &str = "justify-content";
    pub const LINE_HEIGHT: &str = "line-height";
    pub const MARGIN_BLOCK: &str = "margin-block";
    pub const MARGIN_BOTTOM: &str = "margin-bottom";
    pub const MARGIN_INLINE: &str = "margin-inline";
    pub const MARGIN_LEFT: &str = "margin-left";
    pub const MARGIN_TOP: &str = "margin-top";
    pub const MAX_HEIGHT: &str = "max-height";
    pub const MAX_WIDTH: &str = "max-width";
    pub const OPACITY: &str = "opacity";
    pub const OVERFLOW_Y: &str = "overflow-y";
    pub const PADDING: &str = "padding";
    pub const PADDING_INLINE: &str = "padding-inline";
    pub const POSITION: &str = "position";
    pub const TEXT_ALIGN: &str = "text-align";
    pub const WIDTH: &str = "width";
    pub const Z_INDEX: &str = "z-index";
}

/// Properties whose numeric values are emitted without a `px` unit.
const UNITLESS: &[&str] = &[
    props::FLEX,
    props::FONT_WEIGHT,
    props::LINE_HEIGHT,
    props::OPACITY,
    props::Z_INDEX,
];

/// A single style property value.
///
/// Values are never validated here: a negative width or an unknown colour name is passed
/// through to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Plain number, rendered in pixels unless the property is unitless.
    Number(f32),
    /// Keyword, colour, percentage or any other literal text.
    Text(String),
}

impl StyleValue {
    fn write_css(&self, key: &str, out: &mut String) {
        match self {
            Self::Number(value) if UNITLESS.contains(&key) => {
                let _ = write!(out, "{value}");
            }
            Self::Number(value) => {
                let _ = write!(out, "{value}px");
            }
            Self::Text(text) => out.push_str(text),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Dimension> for StyleValue {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Px(px) => Self::Number(px),
            Dimension::Percent(pct) => Self::Text(format!("{pct}%")),
            Dimension::Auto => Self::Text("auto".to_string()),
        }
    }
}

/// Length used by the `width`/`height` props of the components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute size in pixels.
    Px(f32),
    /// Fraction of the containing block, `0..=100`.
    Percent(f32),
    /// Size determined by content.
    Auto,
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Self::Px(value as f32)
    }
}

/// Ordered, flat property map.
///
/// Insertion order is preserved so that serialised output is stable; replacing an existing
/// key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, StyleValue>);

impl StyleMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, if defined.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Returns the text value for `key`, if defined and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(StyleValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric value for `key`, if defined and numeric.
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.0.get(key) {
            Some(StyleValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Whether `key` is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property is defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Overlays every property of `other` onto `self`.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Renders the map as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(key);
            out.push_str(": ");
            value.write_css(key, &mut out);
            out.push(';');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Resolves one style set from a base, the state fragments active for this render, and
/// an optional caller override.
///
/// Fragments are `Option`s so conditional fragments (`checked.then_some(&fill)`) can be
/// passed inline; `None` entries are skipped. Precedence is strictly positional: base,
/// then fragments in order, then the override.
pub fn resolve<'a, I>(base: &StyleMap, fragments: I, overrides: Option<&StyleMap>) -> StyleMap
where
    I: IntoIterator<Item = Option<&'a StyleMap>>,
{
    let mut resolved = base.clone();
    for fragment in fragments.into_iter().flatten() {
        resolved.merge(fragment);
    }
    if let Some(overrides) = overrides {
        resolved.merge(overrides);
    }
    tracing::trace!(properties = resolved.len(), "resolved style");
    resolved
}
