//! The value carried by a drag gesture.

/// What kind of text a drag gesture is carrying. Drop targets accept an
/// allowlisted subset of kinds and ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// A pre-defined phrase embedded in the optimized essay.
    Phrase,
    /// Free text the user selected with the pointer.
    SelectedText,
    /// A designated highlight sentence from the reading passage.
    HighlightedSentence,
}

/// Immutable payload attached to the platform drag session when a gesture
/// starts; discarded when the gesture ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub text: String,
}

impl DragPayload {
    pub fn new(kind: PayloadKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn phrase(text: impl Into<String>) -> Self {
        Self::new(PayloadKind::Phrase, text)
    }

    pub fn selected(text: impl Into<String>) -> Self {
        Self::new(PayloadKind::SelectedText, text)
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self::new(PayloadKind::HighlightedSentence, text)
    }
}
