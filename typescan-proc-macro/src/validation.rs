//! Compile-time type checks for placeholders.

use crate::types::Specifier;
use syn::{Type, TypePath};

/// Specifier kind and display name of a type written as one of the
/// primitive scannable types, or `None` for anything else.
pub fn known_type(ty: &Type) -> Option<(Specifier, &'static str)> {
    match ty {
        Type::Paren(paren) => known_type(&paren.elem),
        Type::Group(group) => known_type(&group.elem),
        Type::Reference(reference) if reference.mutability.is_none() => {
            match single_ident(&reference.elem)?.as_str() {
                "str" => Some((Specifier::Text, "&str")),
                _ => None,
            }
        }
        Type::Path(_) => {
            let kind = match single_ident(ty)?.as_str() {
                "i8" => (Specifier::Signed, "i8"),
                "i16" => (Specifier::Signed, "i16"),
                "i32" => (Specifier::Signed, "i32"),
                "i64" => (Specifier::Signed, "i64"),
                "u8" => (Specifier::Unsigned, "u8"),
                "u16" => (Specifier::Unsigned, "u16"),
                "u32" => (Specifier::Unsigned, "u32"),
                "u64" => (Specifier::Unsigned, "u64"),
                "f32" => (Specifier::Float, "f32"),
                "f64" => (Specifier::Float, "f64"),
                "String" => (Specifier::Text, "String"),
                _ => return None,
            };
            Some(kind)
        }
        _ => None,
    }
}

fn single_ident(ty: &Type) -> Option<String> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    path.get_ident().map(ToString::to_string)
}

/// Checks an explicit specifier against a primitive type.
///
/// Inferred specifiers and types that are not written as a primitive pass;
/// those are checked when the scan runs.
pub fn check_placeholder_type(specifier: Specifier, ty: &Type) -> Result<(), String> {
    if specifier == Specifier::Inferred {
        return Ok(());
    }
    match known_type(ty) {
        Some((expected, type_name)) if expected != specifier => Err(format!(
            "Incorrect format specified - \"{}\", expected - \"{}\" for type \"{}\"",
            specifier.as_str(),
            expected.as_str(),
            type_name
        )),
        _ => Ok(()),
    }
}
