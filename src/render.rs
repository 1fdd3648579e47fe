//! Ways of branching on a [`TaggedValue`] before acting on it.
//!
//! Every function here gives the same string for the same value. They differ
//! only in how the test on the variant is written.

use alloc::string::String;

use crate::value::{number_action, text_action, TaggedValue};

/// Tests for text, acts on it, and falls through to the number otherwise.
pub fn render_guarded(value: &TaggedValue) -> String {
    let number = match value.split_text() {
        Ok(text) => return text_action(text),
        Err(number) => number,
    };
    number_action(number)
}

/// Tests for "not text" first, with the text handled in the other branch.
pub fn render_negated(value: &TaggedValue) -> String {
    match value.split_number() {
        Ok(number) => number_action(number),
        Err(text) => text_action(text),
    }
}

/// Picks the action in a single conditional expression.
pub fn render_conditional(value: &TaggedValue) -> String {
    value.split_text().map_or_else(number_action, text_action)
}

/// Matches on the variants directly.
///
/// # Examples
///
/// ```rust
/// use narrowing::{render, TaggedValue};
///
/// assert_eq!(render(&TaggedValue::from("Rosalind Franklin")), "ROSALIND FRANKLIN");
/// assert_eq!(render(&TaggedValue::from(51)), "51");
/// ```
pub fn render(value: &TaggedValue) -> String {
    match value {
        TaggedValue::Text(text) => text_action(text),
        TaggedValue::Number(number) => number_action(number),
    }
}
