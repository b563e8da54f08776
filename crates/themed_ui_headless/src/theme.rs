//! Default palette and metrics consumed by component constructors.
//!
//! A [`Theme`] is a flat table of defaults. Components copy the values they need when their
//! props are built; nothing is looked up again at render time and nothing cascades.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a theme from configuration text.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The TOML document could not be parsed into a theme.
    #[error("invalid theme toml: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON document could not be parsed into a theme.
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default colours and metrics shared by all components.
///
/// Every field has a default, so configuration files only need the keys they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    /// Brand colour used for buttons, checkbox fills, spinners and the dialog close action.
    pub accent: String,
    /// Button background while pressed.
    pub accent_pressed: String,
    /// Text drawn on top of the accent colour.
    pub on_accent: String,
    /// Background of fields, pickers and overlay surfaces.
    pub surface: String,
    /// Primary text colour.
    pub text: String,
    /// Text colour for placeholders.
    pub text_muted: String,
    /// Border colour of fields and pickers.
    pub border: String,
    /// Separator between picker rows.
    pub divider: String,
    /// Colour of validation messages.
    pub error: String,
    /// Semi-opaque layer drawn behind overlays.
    pub backdrop: String,
    /// Opacity applied to disabled controls.
    pub disabled_opacity: f32,
    /// Default control width in pixels.
    pub control_width: f32,
    /// Default control height in pixels.
    pub control_height: f32,
    /// Default corner radius of fields and pickers.
    pub field_radius: f32,
    /// Default corner radius of buttons.
    pub button_radius: f32,
    /// Base font size in pixels.
    pub font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#F3971D".to_string(),
            accent_pressed: "#FFD700".to_string(),
            on_accent: "white".to_string(),
            surface: "white".to_string(),
            text: "black".to_string(),
            text_muted: "#888".to_string(),
            border: "#ccc".to_string(),
            divider: "#ddd".to_string(),
            error: "red".to_string(),
            backdrop: "rgba(0,0,0,0.4)".to_string(),
            disabled_opacity: 0.6,
            control_width: 200.0,
            control_height: 44.0,
            field_radius: 8.0,
            button_radius: 9.0,
            font_size: 16.0,
        }
    }
}

impl Theme {
    /// Parses a theme from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Toml`] when the document is malformed or a key has the wrong type.
    pub fn from_toml_str(raw: &str) -> Result<Self, ThemeError> {
        let theme: Self = toml::from_str(raw)?;
        tracing::info!(accent = %theme.accent, "loaded theme from toml");
        Ok(theme)
    }

    /// Parses a theme from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] when the document is malformed or a key has the wrong type.
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(raw)?;
        tracing::info!(accent = %theme.accent, "loaded theme from json");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let theme = Theme::from_toml_str(
            r##"
accent = "#0A84FF"
control-height = 48.0
"##,
        )
        .expect("theme");

        assert_eq!(theme.accent, "#0A84FF");
        assert_eq!(theme.control_height, 48.0);
        assert_eq!(theme.border, Theme::default().border);
    }

    #[test]
    fn empty_json_is_the_default_theme() {
        assert_eq!(Theme::from_json_str("{}").expect("theme"), Theme::default());
    }

    #[test]
    fn wrong_type_is_reported() {
        let error = Theme::from_toml_str("control-width = \"wide\"").expect_err("should fail");
        assert!(matches!(error, ThemeError::Toml(_)));
        assert!(error.to_string().starts_with("invalid theme toml"));
    }
}
