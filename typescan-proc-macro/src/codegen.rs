//! Code generation for the `scan!` macro.

use crate::parsing::ScanArgs;
use crate::tokenization::tokenize_format_string;
use crate::types::{FormatToken, Specifier};
use crate::validation::check_placeholder_type;
use proc_macro2::TokenStream;
use quote::quote;

/// Validates the format string against the listed types and generates the
/// call to `typescan::scan`.
pub fn generate_scan_implementation(args: &ScanArgs) -> syn::Result<TokenStream> {
    let format_lit = &args.format;
    let tokens = tokenize_format_string(&format_lit.value(), format_lit)?;
    let specifiers = placeholder_specifiers(&tokens, format_lit)?;

    if specifiers.len() != args.types.len() {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "The number of placeholders({}) does not match the number of parameters({})",
                specifiers.len(),
                args.types.len()
            ),
        ));
    }

    for (specifier, ty) in specifiers.iter().zip(&args.types) {
        check_placeholder_type(*specifier, ty)
            .map_err(|message| syn::Error::new_spanned(ty, message))?;
    }

    let input = &args.input;
    let types = args.types.iter();
    Ok(quote! {
        ::typescan::scan::<(#(#types,)*)>(#input, #format_lit)
    })
}

/// Collects placeholder specifiers in order, rejecting placeholders that
/// follow each other without literal text in between.
fn placeholder_specifiers(
    tokens: &[FormatToken],
    format_lit: &syn::LitStr,
) -> syn::Result<Vec<Specifier>> {
    let mut specifiers = Vec::with_capacity(tokens.len());
    let mut previous_was_placeholder = false;

    for token in tokens {
        match token {
            FormatToken::Placeholder(specifier) => {
                if previous_was_placeholder {
                    return Err(syn::Error::new(
                        format_lit.span(),
                        "Consecutive placeholders without separator are ambiguous and not supported. \
                         Add text between placeholders to separate them. Example: '{}:{}' instead of '{}{}'",
                    ));
                }
                specifiers.push(*specifier);
                previous_was_placeholder = true;
            }
            FormatToken::Text(_) => previous_was_placeholder = false,
        }
    }

    Ok(specifiers)
}
