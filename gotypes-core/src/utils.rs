//! Naming helpers shared by the registry and the generator.

/// Convert a (possibly qualified) type name to lowerCamelCase.
///
/// `time.Duration` -> `timeDuration`, `some_type` -> `someType`, `uint8` -> `uint8`.
pub fn to_lower_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, part) in s.split(['.', '_']).filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            if i == 0 {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Check an identifier name fragment.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !c.is_ascii_uppercase() => {
            return Some("name must start with an uppercase letter");
        }
        Some(_) => {}
    }

    if chars.any(|c| !c.is_ascii_alphanumeric()) {
        return Some("name contains characters other than letters and digits");
    }

    None
}
