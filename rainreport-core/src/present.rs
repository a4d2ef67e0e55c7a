use crate::view::{Slot, ViewSurface};

/// Show `message` in the error panel, replacing whatever it held before.
pub fn present_error<V: ViewSurface + ?Sized>(view: &mut V, message: &str) {
    tracing::warn!(%message, "showing error");
    view.set_visible(Slot::Error);
    view.set_text(Slot::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemoryView;

    #[test]
    fn reveals_error_panel_with_message() {
        let mut view = MemoryView::new();

        present_error(&mut view, "error message");

        assert!(view.is_visible(Slot::Error));
        assert_eq!(view.text(Slot::Error), Some("error message"));
        assert!(!view.is_visible(Slot::RainReport));
    }

    #[test]
    fn last_message_wins() {
        let mut view = MemoryView::new();

        present_error(&mut view, "one");
        present_error(&mut view, "two");

        assert_eq!(view.text(Slot::Error), Some("two"));
    }
}
