//! Input Row Draft
//!
//! Text typed into the entry field before it is committed, plus whether the
//! required-field indicator is showing.

use crate::error::ValidationResult;
use crate::models::ShoppingList;

/// Status of the input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStatus {
    /// No indicator shown (covers both the empty and the typed draft)
    #[default]
    Valid,
    /// Last submit was blank
    Error,
}

/// Draft text and indicator for the entry field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    pub text: String,
    pub status: InputStatus,
}

impl DraftState {
    /// Replace the draft text. The indicator stays as it is until the next submit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn has_error(&self) -> bool {
        self.status == InputStatus::Error
    }

    /// Commit the draft to `list`
    ///
    /// On success the draft is cleared and the indicator hidden. On a blank
    /// draft the indicator is shown and the text is kept for correction.
    pub fn submit(&mut self, list: &mut ShoppingList) -> ValidationResult<()> {
        match list.add(self.text.as_str()) {
            Ok(_) => {
                self.text.clear();
                self.status = InputStatus::Valid;
                Ok(())
            }
            Err(e) => {
                self.status = InputStatus::Error;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn draft(text: &str) -> DraftState {
        let mut d = DraftState::default();
        d.set_text(text);
        d
    }

    #[test]
    fn test_starts_empty_and_valid() {
        let d = DraftState::default();
        assert!(d.text.is_empty());
        assert_eq!(d.status, InputStatus::Valid);
    }

    #[test]
    fn test_submit_non_blank_clears_draft() {
        let mut list = ShoppingList::default();
        let mut d = draft("Milk");
        assert!(d.submit(&mut list).is_ok());
        assert!(d.text.is_empty());
        assert!(!d.has_error());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_submit_blank_shows_error_and_keeps_text() {
        let mut list = ShoppingList::default();
        let mut d = draft("   ");
        assert_eq!(d.submit(&mut list), Err(ValidationError::Blank));
        assert!(d.has_error());
        assert_eq!(d.text, "   ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_error_persists_while_typing() {
        let mut list = ShoppingList::default();
        let mut d = DraftState::default();
        let _ = d.submit(&mut list);
        d.set_text("Eg");
        assert!(d.has_error());
    }

    #[test]
    fn test_error_cleared_by_valid_submit() {
        let mut list = ShoppingList::default();
        let mut d = DraftState::default();
        assert!(d.submit(&mut list).is_err());
        assert!(d.submit(&mut list).is_err());
        assert!(d.has_error());

        d.set_text("Eggs");
        assert!(d.submit(&mut list).is_ok());
        assert_eq!(d.status, InputStatus::Valid);
        assert_eq!(list.items()[0].text(), "Eggs");
    }

    #[test]
    fn test_row_is_reusable() {
        let mut list = ShoppingList::default();
        let mut d = DraftState::default();
        for text in ["Bread", "Bread", "Jam"] {
            d.set_text(text);
            d.submit(&mut list).unwrap();
        }
        let texts: Vec<_> = list.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["Bread", "Bread", "Jam"]);
    }
}
