//! Discriminants and type-directed narrowing.
//!
//! [`Tagged`] is implemented by enums that carry one payload per variant, and
//! [`VariantOf`] by each payload type. Both are usually produced by
//! `#[derive(Narrow)]`, which numbers the variants in declaration order.

use core::fmt;

/// The discriminant of a [`TaggedValue`].
///
/// [`TaggedValue`]: crate::TaggedValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
    Text = 0,
    Number = 1,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Text, Tag::Number];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Tag> {
        match value {
            0 => Some(Tag::Text),
            1 => Some(Tag::Number),
            _ => None,
        }
    }

    /// The name a dynamic `typeof` check reports for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Text => "string",
            Tag::Number => "number",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An enum whose active variant can be inspected and narrowed.
pub trait Tagged: Sized {
    /// The index of the active variant.
    fn tag(&self) -> u8;

    /// The name of the active variant, as set by `#[narrow(name = "...")]`.
    fn tag_name(&self) -> &'static str;

    /// Tests whether the active variant carries a `V`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrowing::{Number, TaggedValue, Tagged, Text};
    ///
    /// let v = TaggedValue::from("Rosalind Franklin");
    /// assert!(v.is::<Text>());
    /// assert!(!v.is::<Number>());
    /// ```
    fn is<V: VariantOf<Self>>(&self) -> bool {
        self.tag() == V::TAG
    }

    /// Borrows the `V` payload if it is the active variant.
    fn get<V: VariantOf<Self>>(&self) -> Option<&V> {
        V::peek(self)
    }

    /// Narrows to the `V` payload, or hands back the untouched value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrowing::{Number, TaggedValue, Tagged, Text};
    ///
    /// let v = TaggedValue::from(51);
    /// let v = v.narrow::<Text>().unwrap_err();
    /// assert_eq!(v.narrow::<Number>().unwrap().get(), 51.0);
    /// ```
    fn narrow<V: VariantOf<Self>>(self) -> Result<V, Self> {
        <V as TryFrom<Self>>::try_from(self)
    }

    fn inspect<V, F>(self, f: F) -> Self
    where
        V: VariantOf<Self>,
        F: FnOnce(&V),
    {
        if let Some(value) = self.get::<V>() {
            f(value);
        }
        self
    }
}

/// A payload type that is exactly one variant of `E`.
pub trait VariantOf<E: Tagged>: Into<E> + TryFrom<E, Error = E> {
    const TAG: u8;

    fn peek(value: &E) -> Option<&Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_values() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_value(tag.value()), Some(tag));
        }
        assert_eq!(Tag::from_value(2), None);
        assert_eq!(Tag::Text.name(), "string");
        assert_eq!(Tag::Number.name(), "number");
    }

    #[test]
    fn display() {
        use std::string::ToString;

        assert_eq!(Tag::Text.to_string(), "string");
        assert_eq!(Tag::Number.to_string(), "number");
    }
}
