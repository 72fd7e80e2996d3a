//! Rust identifier naming.
//!
//! Generated accessors sit next to prost output, so message and field names
//! have to be spelled the way prost spells them.

/// Rust keywords that prost escapes with `r#`.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; prost appends an underscore.
const SUFFIXED_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Converts a string to snake_case.
///
/// Runs of capitals are kept together, so `MDEntryPx` becomes `md_entry_px`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Converts a string to PascalCase.
///
/// Words are split as in [`to_snake_case`], then each word is capitalised
/// and the rest lowercased, so `HTTPRequestEvent` becomes `HttpRequestEvent`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for word in to_snake_case(s).split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars);
        }
    }

    result
}

/// Escapes a snake_case identifier the way prost does.
#[must_use]
pub fn escape_ident(ident: &str) -> String {
    if SUFFIXED_KEYWORDS.contains(&ident) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Returns the struct name prost generates for a message.
#[must_use]
pub fn message_type_name(message: &str) -> String {
    escape_ident(&to_pascal_case(message))
}

/// Returns the struct field name prost generates for a field.
#[must_use]
pub fn field_member_name(field: &str) -> String {
    escape_ident(&to_snake_case(field))
}
