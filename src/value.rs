//! The narrowable value holder.
//!
//! A [`TaggedValue`] is exactly one of [`Text`] or [`Number`], fixed when it
//! is built. The actions take the narrowed payload types, so a caller has to
//! test the variant before it can reach them.

use alloc::string::String;
use core::{fmt, ops::Deref};

use either::Either;

use crate::{fixed, tag::Tag, Narrow, Result};

/// The textual payload of a [`TaggedValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text(value)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.into())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The numeric payload of a [`TaggedValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Number(f64);

impl Number {
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number(f64::from(value))
            }
        }

        impl From<$t> for TaggedValue {
            fn from(value: $t) -> Self {
                TaggedValue::Number(value.into())
            }
        }
    )*};
}

number_from!(f64, f32, i32, u32, i16, u16, i8, u8);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A value that is either [`Text`] or a [`Number`].
///
/// # Examples
///
/// ```rust
/// use narrowing::{TaggedValue, Tagged};
///
/// let v = TaggedValue::from("Rosalind Franklin");
/// assert!(v.is_text());
/// assert_eq!(v.tag_name(), "string");
/// assert_eq!(v.as_text().map(|t| t.as_str()), Some("Rosalind Franklin"));
/// ```
#[derive(Debug, Clone, PartialEq, Narrow)]
pub enum TaggedValue {
    #[narrow(name = "string")]
    Text(Text),
    Number(Number),
}

impl TaggedValue {
    /// Picks the text when `flag` is set and the number otherwise.
    pub fn select(flag: bool, text: impl Into<Text>, number: impl Into<Number>) -> Self {
        if flag {
            TaggedValue::Text(text.into())
        } else {
            TaggedValue::Number(number.into())
        }
    }

    pub fn kind(&self) -> Tag {
        match self {
            TaggedValue::Text(_) => Tag::Text,
            TaggedValue::Number(_) => Tag::Number,
        }
    }

    /// Splits off the text payload. The remainder is always the number.
    pub fn split_text(&self) -> core::result::Result<&Text, &Number> {
        match self {
            TaggedValue::Text(text) => Ok(text),
            TaggedValue::Number(number) => Err(number),
        }
    }

    /// Splits off the numeric payload. The remainder is always the text.
    pub fn split_number(&self) -> core::result::Result<&Number, &Text> {
        match self {
            TaggedValue::Number(number) => Ok(number),
            TaggedValue::Text(text) => Err(text),
        }
    }

    pub fn into_either(self) -> Either<Text, Number> {
        match self {
            TaggedValue::Text(text) => Either::Left(text),
            TaggedValue::Number(number) => Either::Right(number),
        }
    }
}

impl From<String> for TaggedValue {
    fn from(value: String) -> Self {
        TaggedValue::Text(value.into())
    }
}

impl From<&str> for TaggedValue {
    fn from(value: &str) -> Self {
        TaggedValue::Text(value.into())
    }
}

impl<L, R> From<Either<L, R>> for TaggedValue
where
    L: Into<Text>,
    R: Into<Number>,
{
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(text) => TaggedValue::Text(text.into()),
            Either::Right(number) => TaggedValue::Number(number.into()),
        }
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggedValue::Text(text) => fmt::Display::fmt(text, f),
            TaggedValue::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}

/// Returns `true` if `value` holds text and `false` if it holds a number.
pub fn is_text(value: &TaggedValue) -> bool {
    value.is_text()
}

/// Uppercases the text with full Unicode case mapping.
///
/// ```rust
/// use narrowing::{text_action, Text};
///
/// assert_eq!(text_action(&Text::new("Rosalind Franklin")), "ROSALIND FRANKLIN");
/// assert_eq!(text_action(&Text::new("straße")), "STRASSE");
/// ```
pub fn text_action(value: &Text) -> String {
    value.as_str().to_uppercase()
}

/// Renders the number in fixed-decimal notation with no fraction digits.
pub fn number_action(value: &Number) -> String {
    fixed::format_fixed(value.get(), 0)
}

/// Renders the number in fixed-decimal notation with `digits` fraction digits.
pub fn number_action_with(value: &Number, digits: u32) -> Result<String> {
    fixed::to_fixed(value.get(), digits)
}
