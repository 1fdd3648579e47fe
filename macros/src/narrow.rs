use std::collections::BTreeSet;

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned, *};

struct NarrowVariant {
    ident: Ident,
    ty: Type,
    name: LitStr,
    snake: String,
}

impl NarrowVariant {
    fn method_names(&self) -> [String; 4] {
        let snake = &self.snake;
        [
            format!("is_{snake}"),
            format!("as_{snake}"),
            format!("as_{snake}_mut"),
            format!("try_into_{snake}"),
        ]
    }

    fn parse(variant: &Variant) -> syn::Result<Self> {
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields.unnamed[0].ty.clone(),
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "unit variants carry nothing to narrow to; wrap a payload type",
                ));
            }
            Fields::Named(_) => {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "named-field variants are not supported; use a single unnamed payload",
                ));
            }
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "each variant must carry exactly one unnamed field",
                ));
            }
        };

        let snake = variant.ident.unraw().to_string().to_case(Case::Snake);

        let mut name = None;
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("narrow")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse::<LitStr>()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown `narrow` attribute; expected `name`"))
                }
            })?;
        }
        let name = name.unwrap_or_else(|| LitStr::new(&snake, variant.ident.span()));

        Ok(NarrowVariant {
            ident: variant.ident.clone(),
            ty,
            name,
            snake,
        })
    }
}

fn collect_variants(input: &DeriveInput) -> syn::Result<Vec<NarrowVariant>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(data) => {
            return Err(syn::Error::new(
                data.struct_token.span(),
                "`Narrow` can only be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Narrow` can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic enums are not supported",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "cannot narrow an enum without variants",
        ));
    }
    if data.variants.len() > usize::from(u8::MAX) + 1 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "too many variants for a `u8` tag",
        ));
    }

    let mut variants: Vec<NarrowVariant> = Vec::with_capacity(data.variants.len());
    let mut methods: BTreeSet<String> = BTreeSet::new();
    let mut err: Option<syn::Error> = None;
    let mut push_err = |e: syn::Error| match &mut err {
        Some(err) => err.combine(e),
        None => err = Some(e),
    };

    for variant in &data.variants {
        match NarrowVariant::parse(variant) {
            Ok(v) => {
                if variants.iter().any(|d| d.ty == v.ty) {
                    push_err(syn::Error::new_spanned(
                        &v.ty,
                        "multiple variants with the same payload type are not supported",
                    ));
                } else if let Some(clash) = v
                    .method_names()
                    .into_iter()
                    .find(|name| methods.contains(name))
                {
                    push_err(syn::Error::new_spanned(
                        &variant.ident,
                        format_args!(
                            "generated method `{clash}` clashes with one generated for another variant"
                        ),
                    ));
                } else {
                    methods.extend(v.method_names());
                    variants.push(v);
                }
            }
            Err(e) => push_err(e),
        }
    }

    match err {
        Some(err) => Err(err),
        None => Ok(variants),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let variants = collect_variants(input)?;
    let enum_ident = &input.ident;
    let vis = &input.vis;

    let methods = variants.iter().map(|v| {
        let NarrowVariant { ident, ty, snake, .. } = v;
        let is = format_ident!("is_{}", snake);
        let as_ref = format_ident!("as_{}", snake);
        let as_mut = format_ident!("as_{}_mut", snake);
        let try_into = format_ident!("try_into_{}", snake);

        let is_doc = format!("Returns `true` if the active variant is [`{enum_ident}::{ident}`].");
        let as_doc = format!("Narrows to the [`{enum_ident}::{ident}`] payload by reference.");
        let try_into_doc = format!(
            "Narrows to the [`{enum_ident}::{ident}`] payload, handing back `self` on a mismatch."
        );

        quote! {
            #[doc = #is_doc]
            #[inline]
            #vis fn #is(&self) -> bool {
                ::core::matches!(self, Self::#ident(_))
            }

            #[doc = #as_doc]
            #[inline]
            #[allow(unreachable_patterns)]
            #vis fn #as_ref(&self) -> ::core::option::Option<&#ty> {
                match self {
                    Self::#ident(value) => ::core::option::Option::Some(value),
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            #[allow(unreachable_patterns)]
            #vis fn #as_mut(&mut self) -> ::core::option::Option<&mut #ty> {
                match self {
                    Self::#ident(value) => ::core::option::Option::Some(value),
                    _ => ::core::option::Option::None,
                }
            }

            #[doc = #try_into_doc]
            #[inline]
            #[allow(unreachable_patterns)]
            #vis fn #try_into(self) -> ::core::result::Result<#ty, Self> {
                match self {
                    Self::#ident(value) => ::core::result::Result::Ok(value),
                    other => ::core::result::Result::Err(other),
                }
            }
        }
    });

    let impls = variants.iter().enumerate().map(|(tag, v)| {
        let NarrowVariant { ident, ty, snake, .. } = v;
        let tag = tag as u8;
        let as_ref = format_ident!("as_{}", snake);
        let try_into = format_ident!("try_into_{}", snake);

        quote! {
            impl ::core::convert::From<#ty> for #enum_ident {
                #[inline]
                fn from(value: #ty) -> Self {
                    Self::#ident(value)
                }
            }

            impl ::core::convert::TryFrom<#enum_ident> for #ty {
                type Error = #enum_ident;

                #[inline]
                fn try_from(value: #enum_ident) -> ::core::result::Result<Self, #enum_ident> {
                    value.#try_into()
                }
            }

            impl ::narrowing::VariantOf<#enum_ident> for #ty {
                const TAG: u8 = #tag;

                #[inline]
                fn peek(value: &#enum_ident) -> ::core::option::Option<&Self> {
                    value.#as_ref()
                }
            }
        }
    });

    let tag_arms = variants.iter().enumerate().map(|(tag, v)| {
        let ident = &v.ident;
        let tag = tag as u8;
        quote!(Self::#ident(_) => #tag,)
    });
    let name_arms = variants.iter().map(|v| {
        let NarrowVariant { ident, name, .. } = v;
        quote!(Self::#ident(_) => #name,)
    });

    Ok(quote! {
        impl #enum_ident {
            #(#methods)*
        }

        #(#impls)*

        impl ::narrowing::Tagged for #enum_ident {
            #[inline]
            fn tag(&self) -> u8 {
                match self {
                    #(#tag_arms)*
                }
            }

            #[inline]
            fn tag_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    })
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    expand(&input).unwrap_or_else(|err| err.to_compile_error())
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, DeriveInput};

    use super::*;

    fn expand_str(input: DeriveInput) -> String {
        expand_derive(input).to_string()
    }

    #[test]
    fn two_variants() {
        let out = expand_str(parse_quote! {
            pub enum Value {
                #[narrow(name = "string")]
                Text(String),
                Number(f64),
            }
        });

        assert!(out.contains("fn is_text"));
        assert!(out.contains("fn as_number_mut"));
        assert!(out.contains("fn try_into_number"));
        assert!(out.contains("const TAG : u8 = 1u8"));
        assert!(out.contains("\"string\""));
        assert!(out.contains("\"number\""));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn snake_case_names() {
        let out = expand_str(parse_quote! {
            enum Reading {
                RawBytes(Vec<u8>),
                r#Type(u32),
            }
        });

        assert!(out.contains("fn is_raw_bytes"));
        assert!(out.contains("fn as_type"));
        assert!(out.contains("\"raw_bytes\""));
    }

    #[test]
    fn rejects_non_enums() {
        let out = expand_str(parse_quote! {
            struct Plain(u32);
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("can only be derived for enums"));
    }

    #[test]
    fn rejects_bad_variants() {
        let input: DeriveInput = parse_quote! {
            enum Bad {
                Empty,
                Pair(u8, u8),
                Named { x: u8 },
            }
        };
        let err = collect_variants(&input).err().unwrap();
        assert_eq!(err.into_iter().count(), 3);
    }

    #[test]
    fn rejects_duplicate_payloads() {
        let out = expand_str(parse_quote! {
            enum Dup {
                First(String),
                Second(String),
            }
        });
        assert!(out.contains("same payload type"));
    }

    #[test]
    fn rejects_name_collisions() {
        let out = expand_str(parse_quote! {
            enum Value {
                Text(String),
                TextMut(u8),
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("generated method `as_text_mut` clashes"));

        let input: DeriveInput = parse_quote! {
            enum Value {
                Text(String),
                Text2(u8),
                TEXT(u16),
            }
        };
        let err = collect_variants(&input).err().unwrap();
        assert_eq!(err.into_iter().count(), 1);
    }

    #[test]
    fn rejects_unknown_attribute() {
        let out = expand_str(parse_quote! {
            enum Value {
                #[narrow(rename = "x")]
                Text(String),
            }
        });
        assert!(out.contains("unknown `narrow` attribute"));
    }

    #[test]
    fn rejects_generics_and_empty() {
        let generic = expand_str(parse_quote! {
            enum Wrap<T> {
                Inner(T),
            }
        });
        assert!(generic.contains("generic enums are not supported"));

        let empty = expand_str(parse_quote! {
            enum Never {}
        });
        assert!(empty.contains("without variants"));
    }
}
