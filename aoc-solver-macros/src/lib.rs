//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parse;
use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, UnOp, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the inventory
/// system, allowing it to be discovered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2020)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "memo"])
///
/// # Requirements
///
/// The type must implement the `DaySolver` trait. If it does not, the error points at
/// the type:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: DaySolver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AutoRegisterSolver, DaySolver, Elements, ParseError, SolveError};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2020, day = 1, tags = ["easy"])]
/// struct Day1(Vec<i64>);
///
/// impl DaySolver for Day1 {
///     type Input = Elements<i64>;
///     // ...
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires an #[aoc(...)] attribute")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let list =
                content.parse_terminated(<syn::LitStr as Parse>::parse, syn::Token![,])?;
            tags.extend(list.iter().map(syn::LitStr::value));
        } else {
            return Err(meta.error("expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;
    let tags = tags.iter().map(String::as_str);

    Ok(quote! {
        // Compile-time check that the type implements DaySolver
        const _: () = {
            trait MustImplementDaySolver: ::aoc_solver::DaySolver {}
            impl MustImplementDaySolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                tags: &[#(#tags),*],
                factory: ::aoc_solver::instantiate::<#name>,
            }
        }
    })
}

/// Derive `RawValue` and `Parseable` for a fieldless enum
///
/// Every variant carries `#[raw = ...]` with a character, string or integer literal; all
/// variants must use the same kind. The kind selects the raw token: a single `char`, a
/// word (`String`) or an `i64`. String values must be one word, with no whitespace, `,`,
/// `:` or `;`. Character-backed enums also get `Glyph` unless a raw value is a line break,
/// so `Vec<Enum>` parses as a row.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::RawValueEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
/// enum EyeColor {
///     #[raw = "amb"]
///     Amber,
///     #[raw = "blu"]
///     Blue,
/// }
/// ```
#[proc_macro_derive(RawValueEnum, attributes(raw))]
pub fn derive_raw_value_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_raw_value_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RawKind {
    Char,
    Str,
    Int,
}

struct RawVariant {
    ident: Ident,
    kind: RawKind,
    /// Normalized value used for duplicate detection
    key: String,
    literal: Expr,
}

fn expand_raw_value_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "RawValueEnum does not support generic enums",
        ));
    }
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "RawValueEnum can only be derived for enums"));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "RawValueEnum needs at least one variant"));
    }

    let mut variants: Vec<RawVariant> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(variant, "raw-value variants cannot have fields"));
        }
        let attr = variant
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("raw"))
            .ok_or_else(|| syn::Error::new_spanned(variant, "missing #[raw = ...] attribute"))?;
        let value = &attr.meta.require_name_value()?.value;
        let (kind, key) = classify(value)?;

        if let Some(first) = variants.first()
            && first.kind != kind
        {
            return Err(syn::Error::new_spanned(
                value,
                "all raw values of an enum must be the same kind of literal",
            ));
        }
        if variants.iter().any(|v| v.key == key) {
            return Err(syn::Error::new_spanned(value, "duplicate raw value"));
        }
        variants.push(RawVariant {
            ident: variant.ident.clone(),
            kind,
            key,
            literal: value.clone(),
        });
    }

    let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
    let literals: Vec<&Expr> = variants.iter().map(|v| &v.literal).collect();

    let glyph = (variants[0].kind == RawKind::Char
        && variants.iter().all(|v| v.key != "\n" && v.key != "\r"))
    .then(|| quote!(impl ::aoc_solver::Glyph for #name {}));

    let (raw_type, to_raw, scrutinee) = match variants[0].kind {
        RawKind::Char => (quote!(char), quote!(#(Self::#idents => #literals),*), quote!(*raw)),
        RawKind::Int => (quote!(i64), quote!(#(Self::#idents => #literals),*), quote!(*raw)),
        RawKind::Str => (
            quote!(::std::string::String),
            quote!(#(Self::#idents => ::std::string::String::from(#literals)),*),
            quote!(raw.as_str()),
        ),
    };

    Ok(quote! {
        impl ::aoc_solver::RawValue for #name {
            type Raw = #raw_type;

            fn raw_value(&self) -> Self::Raw {
                match self {
                    #to_raw
                }
            }

            fn from_raw_value(raw: &Self::Raw) -> ::std::option::Option<Self> {
                match #scrutinee {
                    #(#literals => ::std::option::Option::Some(Self::#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::aoc_solver::Parseable for #name {
            fn parse_one(
                cursor: &mut ::aoc_solver::Cursor<'_>,
            ) -> ::std::result::Result<Self, ::aoc_solver::ParseError> {
                ::aoc_solver::parse_raw_value(cursor)
            }

            fn render(&self) -> ::std::string::String {
                ::aoc_solver::render_raw_value(self)
            }
        }

        #glyph
    })
}

/// Must agree with `aoc_solver::is_word_char`
fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ',' | ':' | ';')
}

/// Work out the literal kind of a `#[raw = ...]` value
fn classify(value: &Expr) -> syn::Result<(RawKind, String)> {
    match value {
        Expr::Lit(ExprLit { lit: Lit::Char(c), .. }) => Ok((RawKind::Char, c.value().to_string())),
        Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => {
            let text = s.value();
            if text.is_empty() {
                return Err(syn::Error::new_spanned(s, "raw string values cannot be empty"));
            }
            if !text.chars().all(is_word_char) {
                return Err(syn::Error::new_spanned(
                    s,
                    "raw string values must be one word without whitespace, `,`, `:` or `;`",
                ));
            }
            Ok((RawKind::Str, text))
        }
        Expr::Lit(ExprLit { lit: Lit::Int(i), .. }) => {
            Ok((RawKind::Int, i.base10_parse::<i64>()?.to_string()))
        }
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => match expr.as_ref() {
            Expr::Lit(ExprLit { lit: Lit::Int(i), .. }) => {
                Ok((RawKind::Int, (-i.base10_parse::<i64>()?).to_string()))
            }
            other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
        },
        other => Err(syn::Error::new_spanned(
            other,
            "expected a char, string or integer literal",
        )),
    }
}
