//! Page-scoped free-text selection.
//!
//! Holds the last text the user selected with the pointer. The UI turns a
//! non-empty selection into a draggable chip; releasing the pointer outside
//! the retained regions (the selectable text and the chip itself) clears it.

#[derive(Debug, Default)]
pub struct SelectionState {
    current: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new selection. Whitespace-only input is ignored so an
    /// accidental empty selection does not wipe the previous one.
    pub fn capture(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.current = Some(trimmed.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_trimmed_text() {
        let mut selection = SelectionState::new();
        selection.capture("  some words \n");
        assert_eq!(selection.text(), Some("some words"));
    }

    #[test]
    fn blank_capture_keeps_previous_selection() {
        let mut selection = SelectionState::new();
        selection.capture("kept");
        selection.capture("   ");
        assert_eq!(selection.text(), Some("kept"));
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = SelectionState::new();
        selection.capture("gone");
        selection.clear();
        assert!(selection.is_empty());
    }
}
