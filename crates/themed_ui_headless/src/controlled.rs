//! Controlled-value contract shared by every interactive component.
//!
//! The host owns the authoritative value. A component receives it by value together with a
//! single [`Notifier`] and only ever *proposes* the next value; it renders whatever the host
//! passes on the next render, so a host that ignores the notification sees no change.

use std::fmt;
use std::rc::Rc;

/// Single change callback handed down by the host.
///
/// Cloning shares the same callback.
pub struct Notifier<T>(Rc<dyn Fn(T)>);

impl<T> Notifier<T> {
    /// Wraps a callback.
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback with a proposed value.
    pub fn notify(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Notifier(..)")
    }
}

impl<T, F> From<F> for Notifier<T>
where
    F: Fn(T) + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

/// A value supplied by the host plus the callback used to request a new one.
#[derive(Debug, Clone)]
pub struct Controlled<T> {
    value: T,
    on_change: Notifier<T>,
    disabled: bool,
}

impl<T> Controlled<T> {
    /// Binds the current value to its change callback.
    pub fn new(value: T, on_change: impl Into<Notifier<T>>) -> Self {
        Self {
            value,
            on_change: on_change.into(),
            disabled: false,
        }
    }

    /// Sets whether proposals are suppressed.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Current host-supplied value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Forwards `next` to the host unless disabled. Returns whether the host was notified.
    ///
    /// The stored value is never touched.
    pub fn propose(&self, next: T) -> bool {
        if self.disabled {
            tracing::debug!("proposal dropped: field disabled");
            return false;
        }
        self.on_change.notify(next);
        true
    }
}

/// Value-less variant of [`Controlled`] for press-only controls.
#[derive(Debug, Clone)]
pub struct Pressable {
    on_press: Notifier<()>,
    disabled: bool,
}

impl Pressable {
    /// Binds a press callback.
    pub fn new(on_press: impl Into<Notifier<()>>) -> Self {
        Self {
            on_press: on_press.into(),
            disabled: false,
        }
    }

    /// Sets whether presses are suppressed.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Notifies the host of a press unless disabled. Returns whether the host was notified.
    pub fn press(&self) -> bool {
        if self.disabled {
            tracing::debug!("press dropped: control disabled");
            return false;
        }
        self.on_press.notify(());
        true
    }
}


#[cfg(test)]
mod tests {
    use super::testing::recorder;
    use super::*;

    #[test]
    fn propose_forwards_without_storing() {
        let (notifier, calls) = recorder();
        let field = Controlled::new(String::from("old"), notifier);

        assert!(field.propose(String::from("new")));
        assert_eq!(field.value(), "old");
        assert_eq!(*calls.borrow(), vec![String::from("new")]);
    }

    #[test]
    fn disabled_field_never_notifies() {
        let (notifier, calls) = recorder::<bool>();
        let field = Controlled::new(false, notifier).disabled(true);

        assert!(!field.propose(true));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn disabled_pressable_never_notifies() {
        let (notifier, calls) = recorder::<()>();
        let control = Pressable::new(notifier).disabled(true);

        assert!(!control.press());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn cloned_notifier_shares_callback() {
        let (notifier, calls) = recorder::<u8>();
        let other = notifier.clone();
        notifier.notify(1);
        other.notify(2);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }
}
