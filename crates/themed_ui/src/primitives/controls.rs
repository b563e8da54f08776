use themed_ui_headless::components::{
    self as model, ButtonInteraction, KeyboardType, SpinnerSize,
};
use themed_ui_headless::{Dimension, Notifier, StyleMap};

use super::*;
use crate::theme::use_theme;

const SPIN_KEYFRAMES: &str = "@keyframes ui-spin { to { transform: rotate(360deg); } }";

#[component]
/// Themed push button. Fires `on_press` on a completed tap unless disabled.
pub fn Button(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] background_color: Option<String>,
    #[prop(optional, into)] pressed_color: Option<String>,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(optional)] border_radius: Option<f32>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let config = Signal::derive(move || {
        let button = model::ButtonProps::themed(&theme, title.get(), notifier(on_press))
            .disabled(disabled.get());
        let button = apply_some(button, &width, model::ButtonProps::width);
        let button = apply_some(button, &height, model::ButtonProps::height);
        let button = apply_some(
            button,
            &background_color,
            model::ButtonProps::background_color,
        );
        let button = apply_some(button, &pressed_color, model::ButtonProps::pressed_color);
        let button = apply_some(button, &text_color, model::ButtonProps::text_color);
        let button = apply_some(button, &border_radius, model::ButtonProps::border_radius);
        apply_some(button, &style, model::ButtonProps::style)
    });
    let pressed = create_rw_signal(false);
    let rendered = Signal::derive(move || {
        config.with(|button| {
            button.render(ButtonInteraction {
                pressed: pressed.get(),
            })
        })
    });

    view! {
        <button
            type="button"
            style=move || rendered.with(|view| view.container.to_css())
            disabled=move || rendered.with(|view| view.disabled)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-state=move || {
                if rendered.with(|view| view.disabled) {
                    "disabled"
                } else if pressed.get() {
                    "pressed"
                } else {
                    "idle"
                }
            }
            data-ui-disabled=move || bool_token(rendered.with(|view| view.disabled))
            on:pointerdown=move |_| pressed.set(true)
            on:pointerup=move |_| pressed.set(false)
            on:pointerleave=move |_| pressed.set(false)
            on:click=move |_| {
                config.get_untracked().press();
            }
        >
            <span data-ui-slot="label" style=move || rendered.with(|view| view.label.to_css())>
                {move || rendered.with(|view| view.title.clone())}
            </span>
        </button>
    }
}

#[component]
/// Controlled checkbox. A tap proposes the inverse of `checked` through `on_change`; the box
/// only changes when the host passes a new `checked`.
pub fn Checkbox(
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional)] size: Option<f32>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] label_color: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let config = Signal::derive(move || {
        let on_change = Notifier::new(move |next: bool| on_change.call(next));
        let checkbox = model::CheckboxProps::themed(&theme, checked.get(), on_change)
            .label(label.get())
            .disabled(disabled.get());
        let checkbox = apply_some(checkbox, &size, model::CheckboxProps::size);
        let checkbox = apply_some(checkbox, &color, model::CheckboxProps::color);
        let checkbox = apply_some(checkbox, &label_color, model::CheckboxProps::label_color);
        apply_some(checkbox, &style, model::CheckboxProps::style)
    });
    let rendered = Signal::derive(move || config.with(model::CheckboxProps::render));
    let handle_tap = move || {
        config.get_untracked().tap();
    };

    view! {
        <div
            role="checkbox"
            tabindex="0"
            aria-checked=move || bool_token(rendered.with(|view| view.checked))
            aria-disabled=move || bool_token(rendered.with(|view| view.disabled))
            style=move || rendered.with(|view| view.container.to_css())
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-slot=ui_slot
            data-ui-state=move || {
                if rendered.with(|view| view.checked) {
                    "checked"
                } else {
                    "unchecked"
                }
            }
            data-ui-disabled=move || bool_token(rendered.with(|view| view.disabled))
            on:click=move |_| handle_tap()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_tap();
                }
                _ => {}
            }
        >
            <span
                data-ui-slot="box"
                style=move || rendered.with(|view| view.check_box.to_css())
            ></span>
            {move || {
                rendered
                    .with(|view| view.label.clone())
                    .map(|(text, style)| {
                        view! {
                            <span data-ui-slot="label" style=style.to_css()>
                                {text}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

#[component]
/// Controlled single-line text field. Every edit is proposed through `on_change_text`; the
/// input keeps showing `value` until the host accepts the edit.
pub fn TextField(
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(into)] on_change_text: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] border_color: Option<String>,
    #[prop(optional)] border_width: Option<f32>,
    #[prop(optional)] border_radius: Option<f32>,
    #[prop(optional)] padding_horizontal: Option<f32>,
    #[prop(optional)] keyboard_type: KeyboardType,
    #[prop(optional)] secure_text_entry: bool,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let value = Signal::derive(move || value.get());
    let config = Signal::derive(move || {
        let on_change = Notifier::new(move |text: String| on_change_text.call(text));
        let field = model::TextFieldProps::themed(&theme, value.get(), on_change)
            .placeholder(placeholder.get())
            .keyboard_type(keyboard_type)
            .secure_text_entry(secure_text_entry)
            .label(label.get())
            .error(error.get())
            .disabled(disabled.get());
        let field = apply_some(field, &width, model::TextFieldProps::width);
        let field = apply_some(field, &height, model::TextFieldProps::height);
        let field = apply_some(field, &border_color, model::TextFieldProps::border_color);
        let field = apply_some(field, &border_width, model::TextFieldProps::border_width);
        let field = apply_some(field, &border_radius, model::TextFieldProps::border_radius);
        let field = apply_some(
            field,
            &padding_horizontal,
            model::TextFieldProps::padding_horizontal,
        );
        apply_some(field, &style, model::TextFieldProps::style)
    });
    let rendered = Signal::derive(move || config.with(model::TextFieldProps::render));

    view! {
        <div
            style=move || rendered.with(|view| view.wrapper.to_css())
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-keyboard=keyboard_type.token()
            data-ui-disabled=move || bool_token(rendered.with(|view| view.disabled))
        >
            {move || {
                rendered
                    .with(|view| view.label.clone())
                    .map(|(text, style)| {
                        view! {
                            <span data-ui-slot="label" style=style.to_css()>
                                {text}
                            </span>
                        }
                    })
            }}
            <input
                node_ref=node_ref
                aria-label=aria_label
                type=move || rendered.with(|view| view.input_type)
                inputmode=move || rendered.with(|view| view.input_mode)
                placeholder=move || rendered.with(|view| view.placeholder.clone())
                prop:value=move || rendered.with(|view| view.value.clone())
                disabled=move || rendered.with(|view| view.disabled)
                style=move || rendered.with(|view| view.input.to_css())
                data-ui-slot="input"
                on:input=move |ev| {
                    config.get_untracked().input(event_target_value(&ev));
                    // Snap back to the host value when the edit was rejected or rewritten.
                    if let Some(input) = node_ref.get_untracked() {
                        let current = value.get_untracked();
                        if input.value() != current {
                            input.set_value(&current);
                        }
                    }
                }
            />
            {move || {
                rendered
                    .with(|view| view.error.clone())
                    .map(|(text, style)| {
                        view! {
                            <span role="alert" data-ui-slot="error" style=style.to_css()>
                                {text}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

#[component]
/// Indeterminate loading indicator.
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let spinner = model::SpinnerProps::themed(&theme).size(size);
    let spinner = apply_some(spinner, &color, model::SpinnerProps::color);
    let view_model = apply_some(spinner, &style, model::SpinnerProps::style).render();

    view! {
        <div
            role="progressbar"
            aria-busy="true"
            aria-label=aria_label
            style=view_model.container.to_css()
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-slot=ui_slot
            data-ui-size=view_model.size.token()
        >
            <style>{SPIN_KEYFRAMES}</style>
            <span data-ui-slot="indicator" style=view_model.indicator.to_css()></span>
        </div>
    }
}
