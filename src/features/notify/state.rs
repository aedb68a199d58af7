//! Toast stack data model: transient, dismissible messages with monotonic
//! ids. Nothing here persists; a page reload starts from an empty stack.

/// Visual style of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One transient message. The id is unique within the stack's lifetime and
/// is the dismiss handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered collection of visible toasts; newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its dismiss handle.
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    /// Removes the toast with the given id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_push_order_with_unique_ids() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastLevel::Success, "one".to_string());
        let second = stack.push(ToastLevel::Error, "two".to_string());

        assert_ne!(first, second);
        assert_eq!(stack.toasts.len(), 2);
        assert_eq!(stack.toasts[0].message, "one");
        assert_eq!(stack.toasts[1].message, "two");
        assert_eq!(stack.toasts[1].level, ToastLevel::Error);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastLevel::Success, "one".to_string());
        let second = stack.push(ToastLevel::Success, "two".to_string());

        stack.dismiss(first);
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, second);

        // Unknown ids are ignored, including already-dismissed ones.
        stack.dismiss(first);
        stack.dismiss(999);
        assert_eq!(stack.toasts.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastLevel::Error, "one".to_string());
        stack.dismiss(first);
        let second = stack.push(ToastLevel::Error, "two".to_string());
        assert!(second > first);
    }

    #[test]
    fn new_stack_is_empty() {
        assert!(ToastStack::new().is_empty());
    }
}
