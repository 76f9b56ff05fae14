//! Parsing and code generation for `#[derive(Selector)]`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

/// Parsed enum.
pub struct SelectorIR {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub variants: Vec<VariantIR>,
    /// Span of the whole input, for enum-level errors.
    pub span: Span,
}

/// One unit variant.
pub struct VariantIR {
    pub ident: syn::Ident,
    /// From `#[name = "..."]` or the identifier.
    pub label: String,
    /// From `#[value = "..."]` or the kebab-cased identifier.
    pub value_id: String,
    pub is_default: bool,
    pub span: Span,
}

impl SelectorIR {
    /// Index of the `#[default]` variant, or 0.
    pub fn default_index(&self) -> usize {
        self.variants.iter().position(|v| v.is_default).unwrap_or(0)
    }
}

pub fn parse(input: &DeriveInput) -> syn::Result<SelectorIR> {
    let data_enum = match &input.data {
        Data::Enum(e) => e,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Selector)] only supports enums, not structs",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Selector)] only supports enums, not unions",
            ))
        }
    };

    let mut variants = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(Selector)] only supports unit variants (no fields)",
            ));
        }

        let label = string_attribute(&variant.attrs, "name")?.unwrap_or_else(|| variant.ident.to_string());
        let value_id =
            string_attribute(&variant.attrs, "value")?.unwrap_or_else(|| kebab_case(&variant.ident.to_string()));

        variants.push(VariantIR {
            ident: variant.ident.clone(),
            label,
            value_id,
            is_default: variant.attrs.iter().any(|a| a.path().is_ident("default")),
            span: variant.span(),
        });
    }

    Ok(SelectorIR {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        variants,
        span: input.ident.span(),
    })
}

pub fn generate(ir: &SelectorIR) -> TokenStream {
    let enum_name = &ir.ident;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();
    let count = ir.variants.len();
    let default_index = ir.default_index();

    let from_index_arms = ir.variants.iter().enumerate().map(|(idx, v)| {
        let ident = &v.ident;
        quote! { #idx => ::core::option::Option::Some(#enum_name::#ident), }
    });

    let to_index_arms = ir.variants.iter().enumerate().map(|(idx, v)| {
        let ident = &v.ident;
        quote! { #enum_name::#ident => #idx, }
    });

    let labels = ir.variants.iter().map(|v| v.label.as_str());
    let value_ids = ir.variants.iter().map(|v| v.value_id.as_str());
    let default_ident = &ir.variants[default_index].ident;

    quote! {
        impl #impl_generics ::faderkit::core::selector::SelectorOptions for #enum_name #ty_generics #where_clause {
            const COUNT: usize = #count;
            const DEFAULT_INDEX: usize = #default_index;

            fn from_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#from_index_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn to_index(self) -> usize {
                match self {
                    #(#to_index_arms)*
                }
            }

            fn labels() -> &'static [&'static str] {
                &[#(#labels),*]
            }

            fn value_ids() -> &'static [&'static str] {
                &[#(#value_ids),*]
            }

            fn default_value() -> Self {
                #enum_name::#default_ident
            }
        }
    }
}

/// Read a `#[key = "..."]` attribute.
fn string_attribute(attrs: &[syn::Attribute], key: &str) -> syn::Result<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident(key) {
            continue;
        }
        let name_value = attr.meta.require_name_value()?;
        return match &name_value.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) => Ok(Some(lit_str.value())),
            other => Err(syn::Error::new_spanned(
                other,
                format!("expected string literal for #[{} = \"...\"]", key),
            )),
        };
    }
    Ok(None)
}

/// `LowPass` -> `low-pass`, `HPFilter` -> `hp-filter`, `Pole_24` -> `pole-24`.
fn kebab_case(ident: &str) -> String {
    let chars: Vec<char> = ident.trim_start_matches("r#").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 && !out.ends_with('-') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }

    out.trim_end_matches('-').to_string()
}
