/// Default upper bound on the number of characters in a prompt.
pub const DEFAULT_MAX_LENGTH: usize = 5000;

/// The user prompt being edited, with its length limit.
///
/// Lengths are counted in Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDraft {
    text: String,
    max_length: usize,
}

impl Default for PromptDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDraft {
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            text: String::new(),
            max_length,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Replace the text. Text longer than the limit is rejected and the
    /// draft keeps its previous content.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().count() > self.max_length {
            return false;
        }
        self.text = text;
        true
    }

    /// Change the limit. The current text is kept even when it no longer
    /// fits; [`is_over_limit`](Self::is_over_limit) reports it.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whitespace-separated words; zero for blank text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > self.max_length
    }

    /// Characters left before the limit, or how far past it the draft is as a
    /// negative number.
    pub fn remaining(&self) -> isize {
        self.max_length as isize - self.char_count() as isize
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Non-blank and within the limit.
    pub fn is_submittable(&self) -> bool {
        !self.is_blank() && !self.is_over_limit()
    }
}
