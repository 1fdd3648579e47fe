/// Builds a `Vec` of [`TaggedValue`]s from a list of texts and numbers.
///
/// Every element goes through the matching `From` conversion, so string
/// literals become [`TaggedValue::Text`] and numeric literals become
/// [`TaggedValue::Number`].
///
/// # Examples
///
/// ```rust
/// use narrowing::{tagged, TaggedValue};
///
/// let values = tagged!["Rosalind Franklin", 51];
/// assert!(values[0].is_text());
/// assert!(values[1].is_number());
/// ```
///
/// [`TaggedValue`]: crate::TaggedValue
/// [`TaggedValue::Text`]: crate::TaggedValue::Text
/// [`TaggedValue::Number`]: crate::TaggedValue::Number
#[macro_export]
macro_rules! tagged {
    [] => [$crate::__private::Vec::<$crate::TaggedValue>::new()];
    [$($value:expr),+ $(,)?] => [
        $crate::__private::vec![$($crate::TaggedValue::from($value)),+]
    ];
}
