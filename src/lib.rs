#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

extern crate alloc;
#[cfg(test)]
extern crate std;

// Lets `#[derive(Narrow)]` output name `::narrowing` inside this crate too.
extern crate self as narrowing;

mod error;
pub mod fixed;
mod macros;
pub mod render;
pub mod tag;
pub mod value;

pub use narrowing_macros::Narrow;

pub use self::{
    error::{Error, Result},
    render::{render, render_conditional, render_guarded, render_negated},
    tag::{Tag, Tagged, VariantOf},
    value::{is_text, number_action, number_action_with, text_action, Number, TaggedValue, Text},
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagged;

    #[test]
    fn basic() {
        let values = tagged!["Rosalind Franklin", 51];
        let rendered: std::vec::Vec<_> = values.iter().map(render).collect();
        assert_eq!(rendered, ["ROSALIND FRANKLIN", "51"]);

        let v = TaggedValue::select(false, "Rosalind Franklin", 51);
        let v = v
            .narrow::<Text>()
            .map(|text| text_action(&text))
            .unwrap_or_else(|rest| render_conditional(&rest));
        assert_eq!(v, "51");

        assert!(tagged![].is_empty());
    }

    #[derive(Debug, Clone, PartialEq, Narrow)]
    enum Reading {
        Celsius(f32),
        #[narrow(name = "label")]
        Label(&'static str),
        RawBytes([u8; 2]),
    }

    #[test]
    fn derived_on_other_enums() {
        let r = Reading::from([1u8, 2]);
        assert!(r.is_raw_bytes());
        assert_eq!(r.tag(), 2);
        assert_eq!(r.tag_name(), "raw_bytes");
        assert_eq!(r.as_celsius(), None);

        let r = Reading::Label("porch");
        assert_eq!(r.tag_name(), "label");
        assert_eq!(<&'static str as VariantOf<Reading>>::TAG, 1);
        let r = r.try_into_celsius().unwrap_err();
        assert_eq!(r.narrow::<&'static str>(), Ok("porch"));

        assert_eq!(Reading::from(21.5f32).narrow::<f32>(), Ok(21.5));
    }
}
