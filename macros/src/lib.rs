use proc_macro::TokenStream;

mod narrow;

/// Derives variant predicates, accessors and narrowing conversions for an
/// enum whose variants each carry exactly one unnamed field.
///
/// See the `narrowing` crate for the generated items.
///
/// Two variants may not carry the same payload type. The check compares types
/// as written, so `String` and `alloc::string::String` are not caught here and
/// surface later as conflicting `From` impls. Variants whose generated method
/// names clash, such as `Text` and `TextMut`, are rejected.
#[proc_macro_derive(Narrow, attributes(narrow))]
pub fn derive_narrow(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    narrow::expand_derive(input).into()
}
