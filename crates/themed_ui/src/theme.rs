//! Theme context shared by every component below a [`ThemeProvider`].

use leptos::*;
use themed_ui_headless::Theme;

/// Makes `theme` the default for components rendered in the current reactive scope.
pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// Returns the provided [`Theme`], or the built-in defaults outside a provider.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[component]
/// Provides a [`Theme`] to descendant components.
///
/// `toml` takes precedence over `theme` when both are given. An unparsable document is
/// reported and the built-in defaults are used instead.
pub fn ThemeProvider(
    #[prop(optional)] theme: Option<Theme>,
    #[prop(optional, into)] toml: Option<String>,
    children: Children,
) -> impl IntoView {
    let theme = match toml.as_deref().map(Theme::from_toml_str) {
        Some(Ok(parsed)) => parsed,
        Some(Err(err)) => {
            logging::warn!("theme ignored: {err}");
            Theme::default()
        }
        None => theme.unwrap_or_default(),
    };
    provide_theme(theme);

    children().into_view()
}
