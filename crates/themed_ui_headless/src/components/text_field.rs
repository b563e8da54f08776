use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::controlled::{Controlled, Notifier};
use crate::style::{props, resolve, Dimension, StyleMap};
use crate::theme::Theme;

static WRAPPER_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::FLEX_DIRECTION, "column")
        .with(props::MARGIN_BLOCK, 8)
});

static INPUT_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::FONT_SIZE, 16)
        .with(props::BORDER_STYLE, "solid")
        .with(props::BOX_SIZING, "border-box")
});

static LABEL_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::MARGIN_BOTTOM, 4)
        .with(props::FONT_WEIGHT, "600")
});

static ERROR_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::MARGIN_TOP, 4)
        .with(props::FONT_SIZE, 12)
});

/// Virtual keyboard requested for a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    /// General text.
    #[default]
    Default,
    /// Digits only.
    NumberPad,
    /// Digits and a decimal separator.
    DecimalPad,
    /// Numbers with punctuation.
    Numeric,
    /// E-mail address entry.
    EmailAddress,
    /// Telephone number entry.
    PhonePad,
    /// URL entry.
    Url,
}

impl KeyboardType {
    /// Stable token used in rendered markup.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NumberPad => "number-pad",
            Self::DecimalPad => "decimal-pad",
            Self::Numeric => "numeric",
            Self::EmailAddress => "email-address",
            Self::PhonePad => "phone-pad",
            Self::Url => "url",
        }
    }

    /// HTML `type` attribute for a plain (non-secure) input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::EmailAddress => "email",
            Self::PhonePad => "tel",
            Self::Url => "url",
            _ => "text",
        }
    }

    /// HTML `inputmode` hint.
    pub fn input_mode(self) -> &'static str {
        match self {
            Self::Default => "text",
            Self::NumberPad | Self::Numeric => "numeric",
            Self::DecimalPad => "decimal",
            Self::EmailAddress => "email",
            Self::PhonePad => "tel",
            Self::Url => "url",
        }
    }
}

/// Configuration of a single-line text field.
#[derive(Debug, Clone)]
pub struct TextFieldProps {
    field: Controlled<String>,
    placeholder: String,
    width: Dimension,
    height: Dimension,
    border_color: String,
    border_width: f32,
    border_radius: f32,
    padding_horizontal: f32,
    keyboard_type: KeyboardType,
    secure_text_entry: bool,
    label: String,
    error: String,
    label_color: String,
    error_color: String,
    disabled_opacity: f32,
    style: Option<StyleMap>,
}

/// Resolved text field ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldView {
    /// Host-supplied text.
    pub value: String,
    /// Hint shown while empty.
    pub placeholder: String,
    /// HTML `type` attribute.
    pub input_type: &'static str,
    /// HTML `inputmode` attribute.
    pub input_mode: &'static str,
    /// Whether edits are ignored.
    pub disabled: bool,
    /// Style of the column wrapping label, input and error.
    pub wrapper: StyleMap,
    /// Style of the input itself.
    pub input: StyleMap,
    /// Label text and style, when non-empty.
    pub label: Option<(String, StyleMap)>,
    /// Error text and style, when non-empty.
    pub error: Option<(String, StyleMap)>,
}

impl TextFieldProps {
    /// Text field with the default theme.
    pub fn new(value: impl Into<String>, on_change_text: impl Into<Notifier<String>>) -> Self {
        Self::themed(&Theme::default(), value, on_change_text)
    }

    /// Text field with defaults taken from `theme`.
    pub fn themed(
        theme: &Theme,
        value: impl Into<String>,
        on_change_text: impl Into<Notifier<String>>,
    ) -> Self {
        Self {
            field: Controlled::new(value.into(), on_change_text),
            placeholder: String::new(),
            width: Dimension::Percent(100.0),
            height: Dimension::Px(theme.control_height),
            border_color: theme.border.clone(),
            border_width: 1.0,
            border_radius: theme.field_radius,
            padding_horizontal: 10.0,
            keyboard_type: KeyboardType::Default,
            secure_text_entry: false,
            label: String::new(),
            error: String::new(),
            label_color: theme.text.clone(),
            error_color: theme.error.clone(),
            disabled_opacity: theme.disabled_opacity,
            style: None,
        }
    }

    /// Sets the hint shown while empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the wrapper width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the input height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the border colour.
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Sets the border width.
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Sets the corner radius.
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Sets the horizontal padding.
    pub fn padding_horizontal(mut self, padding: f32) -> Self {
        self.padding_horizontal = padding;
        self
    }

    /// Sets the requested keyboard.
    pub fn keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    /// Masks the entered text.
    pub fn secure_text_entry(mut self, secure: bool) -> Self {
        self.secure_text_entry = secure;
        self
    }

    /// Sets the label shown above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the validation message shown below the input.
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// Disables editing.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.field = self.field.disabled(disabled);
        self
    }

    /// Sets the per-instance style override for the input.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the view from the host-supplied text.
    pub fn render(&self) -> TextFieldView {
        let disabled = self.field.is_disabled();

        let wrapper_width = StyleMap::new().with(props::WIDTH, self.width);
        let frame = StyleMap::new()
            .with(props::HEIGHT, self.height)
            .with(props::BORDER_COLOR, self.border_color.as_str())
            .with(props::BORDER_WIDTH, self.border_width)
            .with(props::BORDER_RADIUS, self.border_radius)
            .with(props::PADDING_INLINE, self.padding_horizontal);
        let dimmed = StyleMap::new().with(props::OPACITY, self.disabled_opacity);
        let label_tint = StyleMap::new().with(props::COLOR, self.label_color.as_str());
        let error_tint = StyleMap::new().with(props::COLOR, self.error_color.as_str());

        TextFieldView {
            value: self.field.value().clone(),
            placeholder: self.placeholder.clone(),
            input_type: if self.secure_text_entry {
                "password"
            } else {
                self.keyboard_type.input_type()
            },
            input_mode: self.keyboard_type.input_mode(),
            disabled,
            wrapper: resolve(&WRAPPER_BASE, [Some(&wrapper_width)], None),
            input: resolve(
                &INPUT_BASE,
                [Some(&frame), disabled.then_some(&dimmed)],
                self.style.as_ref(),
            ),
            label: (!self.label.is_empty()).then(|| {
                (
                    self.label.clone(),
                    resolve(&LABEL_BASE, [Some(&label_tint)], None),
                )
            }),
            error: (!self.error.is_empty()).then(|| {
                (
                    self.error.clone(),
                    resolve(&ERROR_BASE, [Some(&error_tint)], None),
                )
            }),
        }
    }

    /// Handles an edit by proposing the new text.
    pub fn input(&self, text: impl Into<String>) -> bool {
        self.field.propose(text.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controlled::testing::recorder;

    #[test]
    fn defaults_fill_the_width() {
        let (on_change, _) = recorder::<String>();
        let view = TextFieldProps::new("", on_change).render();

        assert_eq!(view.wrapper.text(props::WIDTH), Some("100%"));
        assert_eq!(view.input.number(props::HEIGHT), Some(44.0));
        assert_eq!(view.input.text(props::BORDER_COLOR), Some("#ccc"));
        assert_eq!(view.input.number(props::PADDING_INLINE), Some(10.0));
        assert_eq!(view.input_type, "text");
        assert!(view.label.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn edits_are_proposed_not_applied() {
        let (on_change, calls) = recorder::<String>();
        let field = TextFieldProps::new("ab", on_change);

        assert!(field.input("abc"));
        assert_eq!(*calls.borrow(), vec!["abc".to_string()]);
        assert_eq!(field.render().value, "ab");
    }

    #[test]
    fn secure_entry_masks_regardless_of_keyboard() {
        let (on_change, _) = recorder::<String>();
        let view = TextFieldProps::new("", on_change)
            .keyboard_type(KeyboardType::EmailAddress)
            .secure_text_entry(true)
            .render();

        assert_eq!(view.input_type, "password");
        assert_eq!(view.input_mode, "email");
    }

    #[test]
    fn label_and_error_render_when_present() {
        let (on_change, _) = recorder::<String>();
        let view = TextFieldProps::new("", on_change)
            .label("Email")
            .error("Required")
            .render();

        let (label, _) = view.label.expect("label");
        let (error, style) = view.error.expect("error");
        assert_eq!(label, "Email");
        assert_eq!(error, "Required");
        assert_eq!(style.text(props::COLOR), Some("red"));
        assert_eq!(style.number(props::FONT_SIZE), Some(12.0));
    }

    #[test]
    fn disabled_field_never_notifies() {
        let (on_change, calls) = recorder::<String>();
        let field = TextFieldProps::new("", on_change).disabled(true);

        assert!(!field.input("x"));
        assert!(calls.borrow().is_empty());
        assert!(field.render().disabled);
    }

    #[test]
    fn style_override_applies_to_the_input() {
        let (on_change, _) = recorder::<String>();
        let view = TextFieldProps::new("", on_change)
            .style(StyleMap::new().with(props::FONT_SIZE, 20))
            .render();
        assert_eq!(view.input.number(props::FONT_SIZE), Some(20.0));
    }

    #[test]
    fn keyboard_tokens_round_trip_through_serde() {
        let parsed: KeyboardType = serde_json::from_str("\"phone-pad\"").expect("keyboard");
        assert_eq!(parsed, KeyboardType::PhonePad);
        assert_eq!(parsed.token(), "phone-pad");
    }
}
