use std::fmt;
use std::rc::Rc;

use themed_ui_headless::components as model;
use themed_ui_headless::{
    overlay, Dimension, HitRegion, Notifier, OverlayFrame, PickerGesture, SelectOption,
    StyleMap,
};

use super::*;
use crate::theme::use_theme;

#[component]
/// Full-screen modal layer. Renders nothing while `visible` is false.
///
/// A tap on the backdrop outside the children fires `on_close`; visibility stays with the host.
pub fn Overlay(
    #[prop(into)] visible: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let theme = use_theme();

    move || {
        let on_close = notifier(on_close);
        overlay::render_tinted(&theme.backdrop, visible.get(), &on_close, || ()).map(|frame| {
            let backdrop = frame.backdrop_style().to_css();
            let content = frame.content_style().to_css();
            let content_frame = frame.clone();
            let children = children.clone();
            view! {
                <div
                    role="presentation"
                    style=backdrop
                    data-ui-primitive="true"
                    data-ui-kind="overlay"
                    data-ui-slot=ui_slot
                    data-ui-state="open"
                    on:click=move |ev| {
                        if is_backdrop_hit(&ev) {
                            frame.tap(HitRegion::Backdrop);
                        }
                    }
                >
                    // The content area spans the backdrop; its own empty space still dismisses.
                    <div
                        data-ui-slot="content"
                        style=content
                        on:click=move |ev| {
                            if is_backdrop_hit(&ev) {
                                content_frame.tap(HitRegion::Backdrop);
                            }
                        }
                    >
                        {children()}
                    </div>
                </div>
            }
        })
    }
}

#[component]
/// Modal dialog with an optional title, caller content and a close action.
pub fn Dialog(
    #[prop(into)] visible: MaybeSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] background_color: Option<String>,
    #[prop(optional, into)] title_color: Option<String>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let theme = use_theme();
    let visible = Signal::derive(move || visible.get());
    let frame = Signal::derive(move || {
        let dialog = model::DialogProps::themed(&theme, visible.get(), notifier(Some(on_close)))
            .title(title.get());
        let dialog = apply_some(dialog, &width, model::DialogProps::width);
        let dialog = apply_some(dialog, &height, model::DialogProps::height);
        let dialog = apply_some(
            dialog,
            &background_color,
            model::DialogProps::background_color,
        );
        let dialog = apply_some(dialog, &title_color, model::DialogProps::title_color);
        apply_some(dialog, &style, model::DialogProps::style).render(|| ())
    });

    let surface = move || {
        let children = children.clone();
        move || {
            frame.get().map(|frame| {
                let body = frame.content().clone();
                let children = children.clone();
                view! {
                    <div
                        role="dialog"
                        aria-modal="true"
                        style=body.surface.to_css()
                        data-ui-primitive="true"
                        data-ui-kind="dialog"
                        data-ui-slot=ui_slot
                        data-ui-state="open"
                    >
                        {body.title.map(|(text, style)| {
                            view! {
                                <h2 data-ui-slot="title" style=style.to_css()>
                                    {text}
                                </h2>
                            }
                        })}
                        <div data-ui-slot="body" style=body.body.to_css()>
                            {children()}
                        </div>
                        <button
                            type="button"
                            data-ui-slot="close"
                            style=body.close_button.to_css()
                            on:click=move |_| {
                                frame.tap(HitRegion::CloseAffordance);
                            }
                        >
                            {body.close_label}
                        </button>
                    </div>
                }
            })
        }
    };

    view! {
        <Overlay visible=visible on_close=on_close>
            {surface()}
        </Overlay>
    }
}

#[component]
/// Controlled single-select picker.
///
/// The closed control shows the label of the option equal to `selected_value`, or the
/// placeholder. A tap opens a modal list; choosing a row proposes its value through
/// `on_value_change` and closes the list, a tap on the backdrop just closes it. The open
/// flag is private to each instance.
pub fn Picker<V>(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption<V>>>,
    #[prop(into)] selected_value: MaybeSignal<Option<V>>,
    #[prop(into)] on_value_change: Callback<V>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] border_color: Option<String>,
    #[prop(optional)] border_radius: Option<f32>,
    #[prop(optional, into)] background_color: Option<String>,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(optional)] style: Option<StyleMap>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView
where
    V: Clone + PartialEq + fmt::Display + fmt::Debug + 'static,
{
    let theme = use_theme();
    let config = Signal::derive(move || {
        let picker = model::PickerProps::themed(
            &theme,
            options.get(),
            selected_value.get(),
            Notifier::new(move |value: V| on_value_change.call(value)),
        );
        let picker = apply_some(picker, &placeholder, model::PickerProps::placeholder);
        let picker = apply_some(picker, &width, model::PickerProps::width);
        let picker = apply_some(picker, &height, model::PickerProps::height);
        let picker = apply_some(picker, &border_color, model::PickerProps::border_color);
        let picker = apply_some(picker, &border_radius, model::PickerProps::border_radius);
        let picker = apply_some(
            picker,
            &background_color,
            model::PickerProps::background_color,
        );
        let picker = apply_some(picker, &text_color, model::PickerProps::text_color);
        apply_some(picker, &style, model::PickerProps::style)
    });
    let instance = store_value(Rc::new(model::Picker::new()));
    let state_changed = create_trigger();

    let dispatch = move |gesture: PickerGesture| {
        let config = config.get_untracked();
        instance.get_value().dispatch(&config, gesture);
        state_changed.notify();
    };

    let close_list = Callback::new(move |_: ()| dispatch(PickerGesture::BackdropTap));

    move || {
        state_changed.track();
        let rendered = instance.get_value().render(&config.get());
        let summary = rendered.summary;
        let open = rendered.overlay.is_some();
        let list = rendered.overlay.map(OverlayFrame::into_content);

        let list_view = move || {
            list.clone().map(|list| {
                let rows = list
                    .rows
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        view! {
                            <li
                                role="option"
                                aria-selected=bool_token(row.selected)
                                style=row.style.to_css()
                                data-ui-slot="option"
                                data-ui-key=row.key
                                on:click=move |_| dispatch(PickerGesture::OptionTap(index))
                            >
                                {row.label}
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <ul role="listbox" data-ui-slot="options" style=list.surface.to_css()>
                        {rows}
                    </ul>
                }
            })
        };

        view! {
            <div
                data-ui-primitive="true"
                data-ui-kind="picker"
                data-ui-slot=ui_slot
                data-ui-state=if open { "open" } else { "closed" }
            >
                <button
                    type="button"
                    aria-haspopup="listbox"
                    aria-expanded=bool_token(open)
                    aria-label=aria_label.clone()
                    style=summary.style.to_css()
                    data-ui-slot="trigger"
                    on:click=move |_| dispatch(PickerGesture::TriggerTap)
                >
                    <span
                        style=summary.text_style.to_css()
                        data-ui-slot="label"
                        data-ui-placeholder=bool_token(summary.placeholder_shown)
                    >
                        {summary.label}
                    </span>
                </button>
                <Overlay visible=open on_close=close_list ui_slot="backdrop">
                    {list_view()}
                </Overlay>
            </div>
        }
    }
}
