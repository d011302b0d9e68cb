//! Derive macro implementation used by `dimunit-core`.
//!
//! `dimunit-derive` is an implementation detail of this workspace. The `TypedQuantity` derive expands in terms of
//! `crate::TypedQuantity`, `crate::HasDimensions`, `crate::Quantity` and `crate::DimensionError`, so it is intended
//! to be used by `dimunit-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimunit` instead and use the predefined typed quantities.
//!
//! # Generated impls
//!
//! For a single-field tuple struct `MyQuantity(f64)`, the derive implements:
//!
//! - `crate::TypedQuantity` and `crate::HasDimensions`
//! - `From<MyQuantity> for crate::Quantity`, `TryFrom<crate::Quantity>` and `TryFrom<&crate::Quantity>`
//! - `Display`, `LowerExp` and `UpperExp`, rendered through the general quantity formatter
//! - `Add`, `Sub`, `Neg`, `AddAssign`, `SubAssign` and scaling by `f64`
//!
//! # Attributes
//!
//! The derive reads a required `#[quantity(...)]` attribute:
//!
//! - `name = "Length"`: type name shown by `%#v` and bad-verb diagnostics
//! - `dimensions = crate::dims::METER`: constant expression of type `DimensionVector`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::TypedQuantity` plus conversions, formatting and same-type arithmetic.
///
/// The derive must be paired with a `#[quantity(...)]` attribute providing `name` and `dimensions`, and applied to a
/// tuple struct with exactly one `f64` field.
///
/// This macro is intended for use by `dimunit-core`.
#[proc_macro_derive(TypedQuantity, attributes(quantity))]
pub fn derive_typed_quantity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_typed_quantity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_typed_quantity_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    ensure_newtype(&input)?;
    let attr = parse_quantity_attribute(&input.attrs)?;

    let type_name = &attr.name;
    let dimensions = &attr.dimensions;

    let expanded = quote! {
        impl crate::TypedQuantity for #name {
            const NAME: &'static str = #type_name;
            const DIMENSIONS: crate::DimensionVector = #dimensions;

            #[inline]
            fn from_magnitude(value: f64) -> Self {
                #name(value)
            }
        }

        impl crate::HasDimensions for #name {
            #[inline]
            fn dimensions(&self) -> crate::DimensionVector {
                <#name as crate::TypedQuantity>::DIMENSIONS
            }

            #[inline]
            fn magnitude(&self) -> f64 {
                self.0
            }
        }

        impl ::core::convert::From<#name> for crate::Quantity {
            #[inline]
            fn from(value: #name) -> Self {
                crate::HasDimensions::to_quantity(&value)
            }
        }

        impl ::core::convert::TryFrom<crate::Quantity> for #name {
            type Error = crate::DimensionError;

            #[inline]
            fn try_from(q: crate::Quantity) -> ::core::result::Result<Self, Self::Error> {
                <#name as crate::TypedQuantity>::try_from_dimensioned(&q)
            }
        }

        impl ::core::convert::TryFrom<&crate::Quantity> for #name {
            type Error = crate::DimensionError;

            #[inline]
            fn try_from(q: &crate::Quantity) -> ::core::result::Result<Self, Self::Error> {
                <#name as crate::TypedQuantity>::try_from_dimensioned(q)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&crate::HasDimensions::to_quantity(self), f)
            }
        }

        impl ::core::fmt::LowerExp for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::LowerExp::fmt(&crate::HasDimensions::to_quantity(self), f)
            }
        }

        impl ::core::fmt::UpperExp for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::UpperExp::fmt(&crate::HasDimensions::to_quantity(self), f)
            }
        }

        impl ::core::ops::Add for #name {
            type Output = #name;

            #[inline]
            fn add(self, rhs: #name) -> #name {
                #name(self.0 + rhs.0)
            }
        }

        impl ::core::ops::AddAssign for #name {
            #[inline]
            fn add_assign(&mut self, rhs: #name) {
                self.0 += rhs.0;
            }
        }

        impl ::core::ops::Sub for #name {
            type Output = #name;

            #[inline]
            fn sub(self, rhs: #name) -> #name {
                #name(self.0 - rhs.0)
            }
        }

        impl ::core::ops::SubAssign for #name {
            #[inline]
            fn sub_assign(&mut self, rhs: #name) {
                self.0 -= rhs.0;
            }
        }

        impl ::core::ops::Neg for #name {
            type Output = #name;

            #[inline]
            fn neg(self) -> #name {
                #name(-self.0)
            }
        }

        impl ::core::ops::Mul<f64> for #name {
            type Output = #name;

            #[inline]
            fn mul(self, rhs: f64) -> #name {
                #name(self.0 * rhs)
            }
        }

        impl ::core::ops::Mul<#name> for f64 {
            type Output = #name;

            #[inline]
            fn mul(self, rhs: #name) -> #name {
                #name(self * rhs.0)
            }
        }

        impl ::core::ops::Div<f64> for #name {
            type Output = #name;

            #[inline]
            fn div(self, rhs: f64) -> #name {
                #name(self.0 / rhs)
            }
        }
    };

    Ok(expanded)
}

/// Rejects anything but a non-generic tuple struct with a single field.
fn ensure_newtype(input: &DeriveInput) -> syn::Result<()> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "TypedQuantity cannot be derived for generic types",
        ));
    }
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(()),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "TypedQuantity requires a tuple struct with exactly one f64 field",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "TypedQuantity can only be derived for structs",
        )),
    }
}

/// Parsed contents of the `#[quantity(...)]` attribute.
struct QuantityAttribute {
    name: LitStr,
    dimensions: Expr,
}

impl Parse for QuantityAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimensions: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "dimensions" => {
                    dimensions = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;

        Ok(QuantityAttribute { name, dimensions })
    }
}

fn parse_quantity_attribute(attrs: &[Attribute]) -> syn::Result<QuantityAttribute> {
    for attr in attrs {
        if attr.path().is_ident("quantity") {
            return attr.parse_args::<QuantityAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[quantity(...)] attribute",
    ))
}
