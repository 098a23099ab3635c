//! Placeholder substitution - casing variants over identifier contexts
//!
//! Turns an [`IdentifierContext`](crate::context::IdentifierContext) into a
//! reusable line transformer covering the five canonical casing variants
//! (kebab, camel, Pascal, snake, SCREAMING) plus the `template-package`
//! literal.

pub mod casing;
pub mod substitutor;

pub use casing::*;
pub use substitutor::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::IdentifierContext;

    #[test]
    fn test_substitutor_round_trip_from_context() {
        let mut context = IdentifierContext::new();
        context.insert_str("serviceName", "identity-db");
        context.insert_str("targetName", "get-by-id");

        let substitutor = Substitutor::new(&context);
        let line = substitutor
            .line_replace("export const __targetName__ = __ServiceName__Client")
            .unwrap();
        assert_eq!(line, "export const getById = IdentityDbClient");
    }

    #[test]
    fn test_key_variant_derivation_matches_casing_primitives() {
        // The placeholder spelling tracks the context key through the same
        // casing primitives the values go through.
        assert_eq!(to_kebab_case("serviceName"), "service-name");
        assert_eq!(to_snake_case("serviceName"), "service_name");
        assert_eq!(to_pascal_case("serviceName"), "ServiceName");
        assert_eq!(to_screaming_snake_case("serviceName"), "SERVICE_NAME");
        assert_eq!(to_camel_case("service-name"), "serviceName");
    }
}
