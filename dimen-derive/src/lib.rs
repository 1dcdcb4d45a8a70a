//! Derive macro implementation used by `dimen-core`.
//!
//! `dimen-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`
//! and `crate::Ratio`, so it is intended to be used by `dimen-core` (or by crates that expose an identical
//! crate-root API).
//!
//! Most users should depend on `dimen` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`. Display of quantities is
//! generic in `dimen-core` and needs no per-unit code.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "kg"`: displayed unit symbol
//! - `dimension = Mass`: dimension type
//! - `scale = 1000` or `scale = 254 / 10_000`: exact scale relative to the canonical unit of the dimension. A
//!   top-level `/` splits the expression into numerator and denominator; anything else is an integer.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, BinOp, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::Unit`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `scale`.
///
/// This macro is intended for use by `dimen-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let scale = scale_tokens(&unit_attr.scale);

    Ok(quote! {
        impl crate::Unit for #name {
            const SCALE: crate::Ratio = #scale;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }
    })
}

/// `a / b` becomes `Ratio::new(a, b)`; any other expression `n` becomes `Ratio::integer(n)`.
fn scale_tokens(expr: &Expr) -> TokenStream2 {
    match strip_parens(expr) {
        Expr::Binary(bin) if matches!(bin.op, BinOp::Div(_)) => {
            let (num, den) = (&bin.left, &bin.right);
            quote! { crate::Ratio::new(#num, #den) }
        }
        other => {
            let n = other.to_token_stream();
            quote! { crate::Ratio::integer(#n) }
        }
    }
}

fn strip_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(p) => strip_parens(&p.expr),
        Expr::Group(g) => strip_parens(&g.expr),
        other => other,
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    scale: Expr,
}

fn set_once<T>(slot: &mut Option<T>, value: T, ident: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(ident.span(), format!("duplicate attribute `{ident}`")));
    }
    *slot = Some(value);
    Ok(())
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut scale: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => set_once(&mut symbol, input.parse()?, &ident)?,
                "dimension" => set_once(&mut dimension, input.parse()?, &ident)?,
                "scale" => set_once(&mut scale, input.parse()?, &ident)?,
                other => {
                    return Err(syn::Error::new(ident.span(), format!("unknown attribute `{other}`")));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension =
            dimension.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `dimension`"))?;
        let scale = scale.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `scale`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            scale,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| syn::Error::new(proc_macro2::Span::call_site(), "missing #[unit(...)] attribute"))?
        .parse_args::<UnitAttribute>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_unit_impl(input).unwrap().to_string()
    }

    fn parse_error(tokens: TokenStream2) -> String {
        match syn::parse2::<UnitAttribute>(tokens) {
            Ok(_) => panic!("attribute should not parse"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn parse_complete_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "kg", dimension = Mass, scale = 1000)]
            pub struct Kilogram;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "kg");
    }

    #[test]
    fn missing_attribute() {
        let input: DeriveInput = parse_quote! {
            pub struct Kilogram;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_fields_are_named() {
        assert!(parse_error(quote! { dimension = Mass, scale = 1 }).contains("missing required attribute `symbol`"));
        assert!(parse_error(quote! { symbol = "g", scale = 1 }).contains("missing required attribute `dimension`"));
        assert!(parse_error(quote! { symbol = "g", dimension = Mass }).contains("missing required attribute `scale`"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let msg = parse_error(quote! { symbol = "g", dimension = Mass, scale = 1, ratio = 1.0 });
        assert!(msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let msg = parse_error(quote! { symbol = "g", symbol = "kg", dimension = Mass, scale = 1 });
        assert!(msg.contains("duplicate attribute `symbol`"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let attr: UnitAttribute = syn::parse2(quote! { symbol = "m", dimension = Length, scale = 1, }).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn empty_attribute_is_rejected() {
        assert!(syn::parse2::<UnitAttribute>(quote! {}).is_err());
    }

    #[test]
    fn integer_scale_expands_to_integer_ratio() {
        let code = expand(parse_quote! {
            #[unit(symbol = "kg", dimension = Mass, scale = 1000)]
            pub struct Kilogram;
        });
        assert!(code.contains("impl crate :: Unit for Kilogram"));
        assert!(code.contains("const SCALE : crate :: Ratio = crate :: Ratio :: integer (1000)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"kg\""));
        assert!(code.contains("type Dim = Mass"));
    }

    #[test]
    fn quotient_scale_expands_to_fraction() {
        let code = expand(parse_quote! {
            #[unit(symbol = "in", dimension = Length, scale = 254 / 10_000)]
            pub struct Inch;
        });
        assert!(code.contains("crate :: Ratio :: new (254 , 10_000)"));
    }

    #[test]
    fn parenthesized_quotient_is_unwrapped() {
        let code = expand(parse_quote! {
            #[unit(symbol = "u", dimension = Mass, scale = (166 / 10u128.pow(26)))]
            pub struct Dalton;
        });
        assert!(code.contains("crate :: Ratio :: new (166 , 10u128 . pow (26))"));
    }

    #[test]
    fn product_scale_stays_integer() {
        let code = expand(parse_quote! {
            #[unit(symbol = "M☉", dimension = Mass, scale = 1_988_416 * 10u128.pow(27))]
            pub struct SolarMass;
        });
        assert!(code.contains("crate :: Ratio :: integer (1_988_416 * 10u128 . pow (27))"));
    }

    #[test]
    fn composite_dimension_type() {
        let code = expand(parse_quote! {
            #[unit(symbol = "N", dimension = crate::dimension::ForceDim, scale = 1000)]
            pub struct Newton;
        });
        assert!(code.contains("type Dim = crate :: dimension :: ForceDim"));
    }

    #[test]
    fn error_path_produces_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Kilogram;
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }
}
