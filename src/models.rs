//! Shopping List Models
//!
//! `Item` is a non-blank entry; `ShoppingList` is the ordered collection the
//! screen shows. Both are plain values; the reactive layer lives in `store`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// A single shopping-list entry
///
/// Only constructible through [`Item::new`], so the text is never blank.
/// The original text is kept as typed, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Item(String);

impl Item {
    /// Validate and wrap a candidate text
    pub fn new(text: impl Into<String>) -> ValidationResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::Blank);
        }
        Ok(Self(text))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Item {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Item::new(text)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.0
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of items, insertion order preserved, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    /// Append `text` to the end of the list
    ///
    /// Blank text is rejected and the list is left untouched.
    pub fn add(&mut self, text: impl Into<String>) -> ValidationResult<&Item> {
        let item = Item::new(text)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the first item equal to `text`
    ///
    /// Returns `false` when nothing matched; that is not an error.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.items.iter().position(|item| item == text) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item == text)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
