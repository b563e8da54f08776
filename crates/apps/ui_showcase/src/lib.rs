//! Browser showcase for the themed UI primitives.
//!
//! The page is a host in the controlled-component sense: it owns every value shown by the
//! controls (selected fruit, checkbox flag, text, dialog visibility) and updates them from the
//! change callbacks. Nothing here styles a control directly beyond per-instance overrides.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use leptos::*;
use themed_ui::prelude::*;

const THEME_TOML: &str = include_str!("../theme.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fruit {
    Apple,
    Banana,
    Cherry,
}

impl Fruit {
    const ALL: [Self; 3] = [Self::Apple, Self::Banana, Self::Cherry];

    fn label(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Banana => "Banana",
            Self::Cherry => "Cherry",
        }
    }

    fn options() -> Vec<SelectOption<Self>> {
        Self::ALL
            .into_iter()
            .map(|fruit| SelectOption::new(fruit, fruit.label()))
            .collect()
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apple => "apple",
            Self::Banana => "banana",
            Self::Cherry => "cherry",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ShowcaseState {
    fruit: Option<Fruit>,
    subscribed: bool,
    email: String,
    dialog_open: bool,
    loading: bool,
    presses: u32,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            fruit: None,
            subscribed: false,
            email: String::new(),
            dialog_open: false,
            loading: true,
            presses: 0,
        }
    }
}

impl ShowcaseState {
    fn email_error(&self) -> &'static str {
        if self.email.is_empty() || self.email.contains('@') {
            ""
        } else {
            "Enter a valid e-mail address"
        }
    }
}

#[component]
/// Showcase page contents.
pub fn ShowcaseApp() -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::default());
    let spacing = StyleMap::new().with(props::MARGIN_TOP, 12);

    view! {
        <ThemeProvider toml=THEME_TOML>
            <main data-ui-kind="showcase">
                <h1>"Themed UI primitives"</h1>

                <section>
                    <h2>"Buttons"</h2>
                    <Button
                        title="Press me"
                        on_press=Callback::new(move |_| state.update(|value| value.presses += 1))
                    />
                    <Button title="Disabled" disabled=true style=spacing.clone() />
                    <p>{move || format!("Pressed {} times", state.get().presses)}</p>
                </section>

                <section>
                    <h2>"Checkbox"</h2>
                    <Checkbox
                        label="Subscribe to updates"
                        checked=Signal::derive(move || state.get().subscribed)
                        on_change=Callback::new(move |next: bool| {
                            state.update(|value| value.subscribed = next);
                        })
                    />
                    <Checkbox
                        label="Show spinner"
                        checked=Signal::derive(move || state.get().loading)
                        on_change=Callback::new(move |next: bool| {
                            state.update(|value| value.loading = next);
                        })
                        style=spacing.clone()
                    />
                </section>

                <section>
                    <h2>"Text field"</h2>
                    <TextField
                        label="E-mail"
                        placeholder="name@example.com"
                        keyboard_type=KeyboardType::EmailAddress
                        value=Signal::derive(move || state.get().email)
                        error=Signal::derive(move || state.get().email_error().to_string())
                        on_change_text=Callback::new(move |text: String| {
                            state.update(|value| value.email = text.trim_start().to_string());
                        })
                    />
                </section>

                <section>
                    <h2>"Picker"</h2>
                    <Picker
                        aria_label="Favourite fruit"
                        placeholder="Choose a fruit"
                        options=Fruit::options()
                        selected_value=Signal::derive(move || state.get().fruit)
                        on_value_change=Callback::new(move |fruit: Fruit| {
                            state.update(|value| value.fruit = Some(fruit));
                        })
                    />
                    <p>
                        {move || match state.get().fruit {
                            Some(fruit) => format!("Host holds: {}", fruit.label()),
                            None => "Host holds: nothing".to_string(),
                        }}
                    </p>
                </section>

                <section>
                    <h2>"Spinner"</h2>
                    <Show when=move || state.get().loading fallback=|| ()>
                        <Spinner aria_label="Loading" />
                        <Spinner size=SpinnerSize::Small color="#333" aria_label="Loading" />
                    </Show>
                </section>

                <section>
                    <h2>"Dialog"</h2>
                    <Button
                        title="Open dialog"
                        on_press=Callback::new(move |_| {
                            state.update(|value| value.dialog_open = true);
                        })
                    />
                    <Dialog
                        title="Summary"
                        visible=Signal::derive(move || state.get().dialog_open)
                        on_close=Callback::new(move |_: ()| {
                            state.update(|value| value.dialog_open = false);
                        })
                    >
                        <p>
                            {move || {
                                let current = state.get();
                                let email = if current.email.is_empty() {
                                    "-"
                                } else {
                                    current.email.as_str()
                                };
                                format!(
                                    "Fruit: {}. Subscribed: {}. E-mail: {email}.",
                                    current.fruit.map_or("none", Fruit::label),
                                    if current.subscribed { "yes" } else { "no" },
                                )
                            }}
                        </p>
                    </Dialog>
                </section>
            </main>
        </ThemeProvider>
    }
}

/// Mounts [`ShowcaseApp`] to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}
