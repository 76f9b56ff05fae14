//! Semantic checks for `#[derive(Selector)]`.

use std::collections::HashMap;

use crate::selector::SelectorIR;

pub fn validate(ir: &SelectorIR) -> syn::Result<()> {
    check_not_empty(ir)?;
    check_single_default(ir)?;
    check_unique_value_ids(ir)?;
    Ok(())
}

fn check_not_empty(ir: &SelectorIR) -> syn::Result<()> {
    if ir.variants.is_empty() {
        return Err(syn::Error::new(
            ir.span,
            "#[derive(Selector)] requires at least one variant",
        ));
    }
    Ok(())
}

fn check_single_default(ir: &SelectorIR) -> syn::Result<()> {
    if let Some(second) = ir.variants.iter().filter(|v| v.is_default).nth(1) {
        return Err(syn::Error::new(
            second.span,
            "#[derive(Selector)] only one variant can be marked as #[default]",
        ));
    }
    Ok(())
}

fn check_unique_value_ids(ir: &SelectorIR) -> syn::Result<()> {
    let mut seen: HashMap<&str, &syn::Ident> = HashMap::new();

    for variant in &ir.variants {
        if let Some(first) = seen.get(variant.value_id.as_str()) {
            return Err(syn::Error::new(
                variant.span,
                format!(
                    "Duplicate option value \"{}\": already used by variant `{}`",
                    variant.value_id, first
                ),
            ));
        }
        seen.insert(&variant.value_id, &variant.ident);
    }

    Ok(())
}
