extern crate proc_macro;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::Data::Enum;
use syn::{DeriveInput, Ident};

/// Convert an UpperCamelCase identifier to kebab-case, e.g. `TooSmall` -> `too-small`.
fn kebab_case(ident: &str) -> String {
    let mut kebab = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_ascii_uppercase() && i != 0 {
            kebab.push('-');
        }
        kebab.push(c.to_ascii_lowercase());
    }
    kebab
}

fn fieldless_variants<'a>(ast: &'a DeriveInput, derive_name: &str) -> Vec<&'a Ident> {
    let name = &ast.ident;

    let Enum(data) = &ast.data
    else {
        panic!("{derive_name} derive macro can only be applied to enums; {name} is not an enum")
    };

    data.variants
        .iter()
        .map(|variant| {
            let variant_name = &variant.ident;
            if !variant.fields.is_empty() {
                panic!("{derive_name} macro only supports enums with only fieldless variants; {name}::{variant_name} has fields");
            }
            variant_name
        })
        .collect()
}

/// Implement `std::fmt::Display` for a fieldless enum, writing each variant name in kebab-case.
#[proc_macro_derive(EnumDisplay)]
pub fn enum_display(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).expect("unable to parse input");

    let name = &ast.ident;
    let match_arms: Vec<_> = fieldless_variants(&ast, "EnumDisplay")
        .into_iter()
        .map(|variant_name| {
            let display = kebab_case(&variant_name.to_string());
            quote! {
                Self::#variant_name => write!(f, #display)
            }
        })
        .collect();

    let gen = quote! {
        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    #(#match_arms,)*
                }
            }
        }
    };

    gen.into()
}

/// Implement `std::str::FromStr` for a fieldless enum, with `FromStr::Err` set to `String`.
///
/// Accepts the kebab-case spelling produced by `EnumDisplay`, case-insensitively, with `_`
/// treated the same as `-`.
#[proc_macro_derive(EnumFromStr)]
pub fn enum_from_str(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).expect("unable to parse input");

    let name = &ast.ident;
    let variants = fieldless_variants(&ast, "EnumFromStr");

    let spellings: Vec<_> = variants
        .iter()
        .map(|variant_name| kebab_case(&variant_name.to_string()))
        .collect();
    let match_arms: Vec<_> = variants
        .iter()
        .zip(&spellings)
        .map(|(variant_name, spelling)| {
            quote! {
                #spelling => Ok(Self::#variant_name)
            }
        })
        .collect();

    let err_fmt_string = format!(
        "invalid {name} string: '{{}}' (expected one of: {})",
        spellings.join(", ")
    );
    let gen = quote! {
        impl std::str::FromStr for #name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
                    #(#match_arms,)*
                    _ => Err(format!(#err_fmt_string, s))
                }
            }
        }
    };

    gen.into()
}

/// Implement `serde::Serialize` for the given type, serializing values as their `Display` string.
#[proc_macro_derive(StrSerialize)]
pub fn str_serialize(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).expect("unable to parse input");

    let ident = &ast.ident;

    let gen = quote! {
        impl serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };

    gen.into()
}

/// Implement `serde::Deserialize` for the given type by parsing a string with `FromStr`.
#[proc_macro_derive(StrDeserialize)]
pub fn str_deserialize(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).expect("unable to parse input");

    let ident = &ast.ident;

    let visitor = format_ident!("__{}StrVisitor", ident);
    let expecting = format!("a string naming a {ident}");
    let gen = quote! {
        struct #visitor;

        impl<'de> serde::de::Visitor<'de> for #visitor {
            type Value = #ident;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(#expecting)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        impl<'de> serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_str(#visitor)
            }
        }
    };

    gen.into()
}
