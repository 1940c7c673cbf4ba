//! UI handles
//!
//! The handler never looks elements up on its own; callers pass the form,
//! the trigger and the result surface in explicitly.

use crate::constants::LOADING_LABEL;
use crate::render::ResultPanel;

/// Read access to the named form controls
pub trait FieldSource {
    /// Current value of a control. Missing controls read as empty.
    fn value(&self, name: &str) -> String;
}

/// The control that started the invocation
pub trait TriggerControl {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// Where results and alerts end up
pub trait ResultSurface {
    fn hide(&mut self);
    fn show(&mut self, panel: &ResultPanel);
    fn alert(&mut self, message: &str);
}

/// Puts a trigger into its loading state and restores it on drop
///
/// Restoration runs on every exit path, early returns and unwinding
/// included.
pub struct BusyGuard<'a, T: TriggerControl + ?Sized> {
    control: &'a mut T,
    label: String,
    enabled: bool,
}

impl<'a, T: TriggerControl + ?Sized> BusyGuard<'a, T> {
    pub fn engage(control: &'a mut T) -> Self {
        let label = control.label();
        let enabled = control.is_enabled();

        control.set_enabled(false);
        control.set_label(LOADING_LABEL);

        Self { control, label, enabled }
    }
}

impl<T: TriggerControl + ?Sized> Drop for BusyGuard<'_, T> {
    fn drop(&mut self) {
        self.control.set_enabled(self.enabled);
        self.control.set_label(&self.label);
    }
}

impl<S: std::hash::BuildHasher> FieldSource for std::collections::HashMap<String, String, S> {
    fn value(&self, name: &str) -> String {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Button {
        label: String,
        enabled: bool,
        history: Vec<(bool, String)>,
    }

    impl TriggerControl for Button {
        fn label(&self) -> String {
            self.label.clone()
        }
        fn set_label(&mut self, label: &str) {
            self.label = label.to_string();
            self.history.push((self.enabled, self.label.clone()));
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    fn button() -> Button {
        Button { label: "Analyze Risk".into(), enabled: true, history: Vec::new() }
    }

    #[test]
    fn test_guard_restores() {
        let mut btn = button();
        {
            let _guard = BusyGuard::engage(&mut btn);
        }
        assert!(btn.enabled);
        assert_eq!(btn.label, "Analyze Risk");
        assert_eq!(btn.history[0], (false, LOADING_LABEL.to_string()));
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let mut btn = button();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = BusyGuard::engage(&mut btn);
            panic!("render blew up");
        }));
        assert!(outcome.is_err());
        assert!(btn.enabled);
        assert_eq!(btn.label, "Analyze Risk");
    }

    #[test]
    fn test_guard_keeps_prior_disabled_state() {
        let mut btn = Button { enabled: false, ..button() };
        drop(BusyGuard::engage(&mut btn));
        assert!(!btn.enabled);
    }

    #[test]
    fn test_map_field_source() {
        let mut fields = std::collections::HashMap::new();
        fields.insert("Category".to_string(), "Malware".to_string());
        assert_eq!(fields.value("Category"), "Malware");
        assert_eq!(fields.value("CountryCode"), "");
    }
}
