use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::controlled::Notifier;
use crate::overlay::{self, HitRegion, OverlayFrame};
use crate::picker::{
    display_label, selected_option, OverlayState, PickerGesture, PickerMachine, SelectOption,
};
use crate::style::{props, resolve, Dimension, StyleMap};
use crate::theme::Theme;

/// Placeholder shown when no option matches the selection.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

static SUMMARY_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::DISPLAY, "flex")
        .with(props::ALIGN_ITEMS, "center")
        .with(props::PADDING_INLINE, 10)
        .with(props::BORDER_WIDTH, 1)
        .with(props::BORDER_STYLE, "solid")
        .with(props::BOX_SIZING, "border-box")
        .with(props::CURSOR, "pointer")
});

static LIST_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::ALIGN_SELF, "stretch")
        .with(props::MARGIN_INLINE, 40)
        .with(props::BORDER_RADIUS, 8)
        .with(props::MAX_HEIGHT, "50vh")
        .with(props::OVERFLOW_Y, "auto")
});

static ROW_BASE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::new()
        .with(props::PADDING, 15)
        .with(props::BORDER_BOTTOM_WIDTH, 1)
        .with(props::BORDER_STYLE, "none none solid none")
        .with(props::CURSOR, "pointer")
});

/// Configuration of a single-select picker, re-supplied by the host on every render.
#[derive(Debug, Clone)]
pub struct PickerProps<V> {
    options: Rc<[SelectOption<V>]>,
    selected_value: Option<V>,
    on_value_change: Notifier<V>,
    width: Dimension,
    height: Dimension,
    placeholder: String,
    border_color: String,
    border_radius: f32,
    background_color: String,
    text_color: String,
    placeholder_color: String,
    list_color: String,
    divider_color: String,
    backdrop: String,
    style: Option<StyleMap>,
}

impl<V> PickerProps<V> {
    /// Picker with the default theme.
    pub fn new(
        options: impl Into<Rc<[SelectOption<V>]>>,
        selected_value: Option<V>,
        on_value_change: impl Into<Notifier<V>>,
    ) -> Self {
        Self::themed(&Theme::default(), options, selected_value, on_value_change)
    }

    /// Picker with defaults taken from `theme`.
    pub fn themed(
        theme: &Theme,
        options: impl Into<Rc<[SelectOption<V>]>>,
        selected_value: Option<V>,
        on_value_change: impl Into<Notifier<V>>,
    ) -> Self {
        Self {
            options: options.into(),
            selected_value,
            on_value_change: on_value_change.into(),
            width: Dimension::Px(theme.control_width),
            height: Dimension::Px(theme.control_height),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            border_color: theme.border.clone(),
            border_radius: theme.field_radius,
            background_color: theme.surface.clone(),
            text_color: theme.text.clone(),
            placeholder_color: theme.text_muted.clone(),
            list_color: theme.surface.clone(),
            divider_color: theme.divider.clone(),
            backdrop: theme.backdrop.clone(),
            style: None,
        }
    }

    /// Sets the summary width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the summary height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the text shown when nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the summary border colour.
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Sets the summary corner radius.
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Sets the summary background colour.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the colour of the selected label.
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Sets the per-instance style override for the summary control.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Options in render order.
    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    /// Host-owned selection.
    pub fn selected_value(&self) -> Option<&V> {
        self.selected_value.as_ref()
    }
}

/// The closed-state control.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSummary {
    /// Selected label or placeholder.
    pub label: String,
    /// Whether `label` is the placeholder.
    pub placeholder_shown: bool,
    /// Style of the tappable control.
    pub style: StyleMap,
    /// Style of the label text.
    pub text_style: StyleMap,
}

/// One rendered option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    /// List identity derived from the option value.
    pub key: String,
    /// Display text.
    pub label: String,
    /// Whether this row holds the host's current selection.
    pub selected: bool,
    /// Row style.
    pub style: StyleMap,
}

/// Content of the open overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionList {
    /// Style of the list surface.
    pub surface: StyleMap,
    /// Rows in option order.
    pub rows: Vec<OptionRow>,
}

/// Gesture sink shared by a picker instance and the views it renders.
struct PickerHandle<V> {
    machine: Rc<Cell<PickerMachine>>,
    options: Rc<[SelectOption<V>]>,
    on_change: Notifier<V>,
}

impl<V> Clone for PickerHandle<V> {
    fn clone(&self) -> Self {
        Self {
            machine: Rc::clone(&self.machine),
            options: Rc::clone(&self.options),
            on_change: self.on_change.clone(),
        }
    }
}

impl<V: Clone + fmt::Debug> PickerHandle<V> {
    fn dispatch(&self, gesture: PickerGesture) -> OverlayState {
        let mut machine = self.machine.get();
        let selected = machine.apply(gesture, &self.options);
        self.machine.set(machine);
        // The host may dispatch to this instance from its callback.
        if let Some(value) = selected {
            self.on_change.notify(value);
        }
        self.machine.get().state()
    }
}

/// A rendered picker. Gesture methods feed the owning instance's state machine.
pub struct PickerView<V> {
    /// Closed-state control, always rendered.
    pub summary: PickerSummary,
    /// Option list, present only while open.
    pub overlay: Option<OverlayFrame<OptionList>>,
    handle: PickerHandle<V>,
}

impl<V> fmt::Debug for PickerView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerView")
            .field("summary", &self.summary)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl<V: Clone + fmt::Debug> PickerView<V> {
    /// Tap on the summary control.
    pub fn tap_trigger(&self) -> OverlayState {
        self.handle.dispatch(PickerGesture::TriggerTap)
    }

    /// Tap on the backdrop. Ignored when the overlay is not rendered.
    pub fn tap_backdrop(&self) -> OverlayState {
        if let Some(frame) = &self.overlay {
            frame.tap(HitRegion::Backdrop);
        }
        self.handle.machine.get().state()
    }

    /// Tap on the row at `index`.
    pub fn tap_option(&self, index: usize) -> OverlayState {
        self.handle.dispatch(PickerGesture::OptionTap(index))
    }
}

/// One picker instance. Owns only the overlay flag; it is dropped with the instance.
#[derive(Debug, Default)]
pub struct Picker {
    machine: Rc<Cell<PickerMachine>>,
}

impl Picker {
    /// A closed picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overlay state.
    pub fn state(&self) -> OverlayState {
        self.machine.get().state()
    }

    /// Feeds one gesture to the state machine, notifying the host on an option tap.
    pub fn dispatch<V: Clone + fmt::Debug>(
        &self,
        config: &PickerProps<V>,
        gesture: PickerGesture,
    ) -> OverlayState {
        self.handle(config).dispatch(gesture)
    }

    /// Resolves the view for the current state. Rendering never changes state.
    pub fn render<V>(&self, config: &PickerProps<V>) -> PickerView<V>
    where
        V: Clone + PartialEq + fmt::Display + fmt::Debug + 'static,
    {
        let handle = self.handle(config);
        let selected = config.selected_value.as_ref();
        let label = display_label(&config.options, selected, &config.placeholder);
        let placeholder_shown = selected_option(&config.options, selected).is_none();

        let metrics = StyleMap::new()
            .with(props::WIDTH, config.width)
            .with(props::HEIGHT, config.height)
            .with(props::BORDER_COLOR, config.border_color.as_str())
            .with(props::BORDER_RADIUS, config.border_radius)
            .with(props::BACKGROUND_COLOR, config.background_color.as_str());
        let text_style = StyleMap::new().with(
            props::COLOR,
            if placeholder_shown {
                config.placeholder_color.as_str()
            } else {
                config.text_color.as_str()
            },
        );

        let summary = PickerSummary {
            label: label.to_string(),
            placeholder_shown,
            style: resolve(&SUMMARY_BASE, [Some(&metrics)], config.style.as_ref()),
            text_style,
        };

        let backdrop_handle = handle.clone();
        let on_close = Notifier::new(move |()| {
            backdrop_handle.dispatch(PickerGesture::BackdropTap);
        });
        let open = self.state() == OverlayState::Open;
        let overlay = overlay::render_tinted(&config.backdrop, open, &on_close, || {
            let surface_tint =
                StyleMap::new().with(props::BACKGROUND_COLOR, config.list_color.as_str());
            let divider =
                StyleMap::new().with(props::BORDER_BOTTOM_COLOR, config.divider_color.as_str());
            OptionList {
                surface: resolve(&LIST_BASE, [Some(&surface_tint)], None),
                rows: config
                    .options
                    .iter()
                    .map(|option| OptionRow {
                        key: option.value.to_string(),
                        label: option.label.clone(),
                        selected: selected == Some(&option.value),
                        style: resolve(&ROW_BASE, [Some(&divider)], None),
                    })
                    .collect(),
            }
        });

        PickerView {
            summary,
            overlay,
            handle,
        }
    }

    fn handle<V>(&self, config: &PickerProps<V>) -> PickerHandle<V> {
        PickerHandle {
            machine: Rc::clone(&self.machine),
            options: Rc::clone(&config.options),
            on_change: config.on_value_change.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controlled::testing::recorder;

    fn ab() -> Vec<SelectOption<i32>> {
        vec![SelectOption::new(1, "A"), SelectOption::new(2, "B")]
    }

    #[test]
    fn closed_summary_shows_selected_label() {
        let (on_change, _) = recorder::<i32>();
        let config = PickerProps::new(ab(), Some(2), on_change);
        let view = Picker::new().render(&config);

        assert_eq!(view.summary.label, "B");
        assert!(!view.summary.placeholder_shown);
        assert_eq!(view.summary.text_style.text(props::COLOR), Some("black"));
        assert!(view.overlay.is_none());
    }

    #[test]
    fn empty_options_show_placeholder_and_open_to_empty_list() {
        let (on_change, calls) = recorder::<i32>();
        let config = PickerProps::new(Vec::new(), None, on_change).placeholder("Select...");
        let picker = Picker::new();

        let view = picker.render(&config);
        assert_eq!(view.summary.label, "Select...");
        assert_eq!(view.summary.text_style.text(props::COLOR), Some("#888"));

        assert_eq!(view.tap_trigger(), OverlayState::Open);
        let open = picker.render(&config);
        let list = open.overlay.as_ref().expect("overlay").content();
        assert!(list.rows.is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let (on_change, _) = recorder::<i32>();
        let config = PickerProps::new(ab(), Some(1), on_change);
        let picker = Picker::new();

        let first = picker.render(&config);
        let second = picker.render(&config);
        assert_eq!(first.summary, second.summary);
        assert_eq!(picker.state(), OverlayState::Closed);
    }

    #[test]
    fn open_list_renders_rows_in_order() {
        let (on_change, _) = recorder::<i32>();
        let config = PickerProps::new(ab(), Some(2), on_change);
        let picker = Picker::new();
        picker.dispatch(&config, PickerGesture::TriggerTap);

        let view = picker.render(&config);
        let rows = &view.overlay.as_ref().expect("overlay").content().rows;
        let labels: Vec<_> = rows.iter().map(|row| row.label.as_str()).collect();
        let keys: Vec<_> = rows.iter().map(|row| row.key.as_str()).collect();

        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(keys, vec!["1", "2"]);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(rows[0].style.text(props::BORDER_BOTTOM_COLOR), Some("#ddd"));
    }

    #[test]
    fn backdrop_closes_without_selecting() {
        let (on_change, calls) = recorder::<i32>();
        let config = PickerProps::new(ab(), None, on_change);
        let picker = Picker::new();
        picker.dispatch(&config, PickerGesture::TriggerTap);

        let view = picker.render(&config);
        assert_eq!(view.tap_backdrop(), OverlayState::Closed);
        assert_eq!(picker.state(), OverlayState::Closed);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn row_tap_notifies_host_and_closes() {
        let (on_change, calls) = recorder::<i32>();
        let config = PickerProps::new(ab(), None, on_change);
        let picker = Picker::new();
        picker.render(&config).tap_trigger();

        let view = picker.render(&config);
        assert_eq!(view.tap_option(1), OverlayState::Closed);
        assert_eq!(*calls.borrow(), vec![2]);

        // Host has not re-rendered with the new value yet.
        assert_eq!(picker.render(&config).summary.label, "Select...");
        let updated = PickerProps::new(ab(), Some(2), recorder::<i32>().0);
        assert_eq!(picker.render(&updated).summary.label, "B");
    }

    #[test]
    fn stale_selection_falls_back_to_placeholder() {
        let (on_change, _) = recorder::<i32>();
        let config = PickerProps::new(ab(), Some(3), on_change).placeholder("Pick one");
        let view = Picker::new().render(&config);
        assert_eq!(view.summary.label, "Pick one");
        assert!(view.summary.placeholder_shown);
    }

    #[test]
    fn summary_style_honours_props_and_override() {
        let (on_change, _) = recorder::<String>();
        let options = vec![SelectOption::new("x".to_string(), "X")];
        let config = PickerProps::new(options, None, on_change)
            .width(320)
            .border_color("teal")
            .style(StyleMap::new().with(props::BORDER_RADIUS, 0));
        let style = Picker::new().render(&config).summary.style;

        assert_eq!(style.number(props::WIDTH), Some(320.0));
        assert_eq!(style.text(props::BORDER_COLOR), Some("teal"));
        assert_eq!(style.number(props::BORDER_RADIUS), Some(0.0));
    }

    #[test]
    fn host_callback_sees_closed_and_can_reopen() {
        let picker = Rc::new(Picker::new());
        let seen = Rc::new(Cell::new(None));
        let on_change = {
            let picker = Rc::downgrade(&picker);
            let seen = Rc::clone(&seen);
            Notifier::new(move |_: i32| {
                if let Some(picker) = picker.upgrade() {
                    seen.set(Some(picker.state()));
                    let config = PickerProps::new(ab(), None, recorder::<i32>().0);
                    picker.dispatch(&config, PickerGesture::TriggerTap);
                }
            })
        };
        let config = PickerProps::new(ab(), None, on_change);
        picker.dispatch(&config, PickerGesture::TriggerTap);

        let returned = picker.dispatch(&config, PickerGesture::OptionTap(0));

        assert_eq!(seen.get(), Some(OverlayState::Closed));
        assert_eq!(returned, OverlayState::Open);
        assert_eq!(picker.state(), OverlayState::Open);
    }

    #[test]
    fn instances_do_not_share_state() {
        let (on_change, _) = recorder::<i32>();
        let config = PickerProps::new(ab(), None, on_change);
        let first = Picker::new();
        let second = Picker::new();

        first.dispatch(&config, PickerGesture::TriggerTap);
        assert_eq!(first.state(), OverlayState::Open);
        assert_eq!(second.state(), OverlayState::Closed);
    }
}
