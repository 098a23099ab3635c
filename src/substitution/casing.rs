//! Casing transformations for identifier variants
//!
//! All transformations accept kebab-case, camelCase, PascalCase,
//! snake_case, and space-separated input; snake_case is the normalization
//! pivot the other variants are derived through.

/// Converts a string to snake_case.
///
/// # Examples
/// ```
/// use genweave::substitution::casing::to_snake_case;
///
/// assert_eq!(to_snake_case("identity-db"), "identity_db");
/// assert_eq!(to_snake_case("getById"), "get_by_id");
/// assert_eq!(to_snake_case("SharedPackagePrefix"), "shared_package_prefix");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            // Word boundary only after a lowercase run
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_end_matches('_').to_string()
}

/// Converts a string to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Converts a string to SCREAMING_SNAKE_CASE.
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Converts a string to PascalCase.
///
/// # Examples
/// ```
/// use genweave::substitution::casing::to_pascal_case;
///
/// assert_eq!(to_pascal_case("identity-db"), "IdentityDb");
/// assert_eq!(to_pascal_case("get_by_id"), "GetById");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to camelCase.
///
/// # Examples
/// ```
/// use genweave::substitution::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("identity-db"), "identityDb");
/// assert_eq!(to_camel_case("get_by_id"), "getById");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
