//! Placeholder substitution over template text
//!
//! A [`Substitutor`] derives a placeholder table from an
//! [`IdentifierContext`] once, then transforms template lines any number of
//! times. For every string-valued context entry keyed `camelKey` with value
//! `V`, five placeholders are registered:
//!
//! | placeholder        | value                 |
//! |--------------------|-----------------------|
//! | `__camel-key__`    | `V` (unchanged)       |
//! | `__camelKey__`     | `camelCase(V)`        |
//! | `__camel_key__`    | `snake_case(V)`       |
//! | `__CamelKey__`     | `PascalCase(V)`       |
//! | `__CAMEL_KEY__`    | `SCREAMING_SNAKE(V)`  |
//!
//! The reserved literal `template-package` additionally resolves to the
//! context's `sharedPackagePrefix`, without placeholder delimiters, so it
//! stays valid inside import specifiers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::IdentifierContext;
use crate::errors::{Error, Result};
use crate::substitution::casing::{
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
};

/// Literal token resolved to the shared package prefix
pub const PACKAGE_PREFIX_TOKEN: &str = "template-package";

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

/// Stateless line transformer backed by a placeholder table.
///
/// Built once per generation invocation and reused across all lines of all
/// files; [`Substitutor::line_replace`] is deterministic and performs no
/// I/O.
#[derive(Debug, Clone)]
pub struct Substitutor {
    replacements: HashMap<String, String>,
    package_prefix: Option<String>,
}

impl Substitutor {
    /// Build the placeholder table from a context.
    ///
    /// When distinct casing variants of a key collapse into the same token
    /// (single-word keys), the first registration wins: the kebab variant,
    /// which carries the value unchanged.
    pub fn new(context: &IdentifierContext) -> Self {
        let mut replacements: HashMap<String, String> = HashMap::new();
        for (key, value) in context.string_entries() {
            let variants = [
                (to_kebab_case(key), value.to_string()),
                (to_camel_case(key), to_camel_case(value)),
                (to_snake_case(key), to_snake_case(value)),
                (to_pascal_case(key), to_pascal_case(value)),
                (to_screaming_snake_case(key), to_screaming_snake_case(value)),
            ];
            for (token_key, resolved) in variants {
                replacements
                    .entry(format!("__{token_key}__"))
                    .or_insert(resolved);
            }
        }

        let package_prefix = context.get_str("sharedPackagePrefix").map(str::to_string);

        Self {
            replacements,
            package_prefix,
        }
    }

    /// Transform one line of template text.
    ///
    /// The `template-package` literal is resolved first, then every
    /// `__token__` occurrence. Resolution is atomic per line: all tokens
    /// are looked up before any substitution is applied, and an unknown
    /// token fails the line with [`Error::MissingReplacement`]. Callers
    /// should treat that as fatal for the enclosing file.
    pub fn line_replace(&self, line: &str) -> Result<String> {
        let mut output = line.to_string();

        if let Some(prefix) = &self.package_prefix {
            if output.contains(PACKAGE_PREFIX_TOKEN) {
                output = output.replace(PACKAGE_PREFIX_TOKEN, prefix);
            }
        }

        let tokens: Vec<String> = PLACEHOLDER_RE
            .find_iter(&output)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut resolved = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.replacements.get(token) {
                Some(value) => resolved.push((token, value)),
                None => return Err(Error::missing_replacement(token.as_str())),
            }
        }

        for (token, value) in resolved {
            output = output.replace(token.as_str(), value);
        }

        Ok(output)
    }

    /// Transform a whole template text line by line, preserving the
    /// trailing-newline state of the input.
    pub fn render(&self, text: &str) -> Result<String> {
        let mut lines = Vec::new();
        for line in text.lines() {
            lines.push(self.line_replace(line)?);
        }
        let mut output = lines.join("\n");
        if text.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service_context() -> IdentifierContext {
        let mut context = IdentifierContext::new();
        context.insert_str("serviceName", "identity-db");
        context
    }

    #[test]
    fn test_five_variants_registered_per_key() {
        let substitutor = Substitutor::new(&service_context());

        assert_eq!(
            substitutor.line_replace("__service-name__").unwrap(),
            "identity-db"
        );
        assert_eq!(
            substitutor.line_replace("__serviceName__").unwrap(),
            "identityDb"
        );
        assert_eq!(
            substitutor.line_replace("__service_name__").unwrap(),
            "identity_db"
        );
        assert_eq!(
            substitutor.line_replace("__ServiceName__").unwrap(),
            "IdentityDb"
        );
        assert_eq!(
            substitutor.line_replace("__SERVICE_NAME__").unwrap(),
            "IDENTITY_DB"
        );
    }

    #[test]
    fn test_line_replace_multiple_tokens() {
        let substitutor = Substitutor::new(&service_context());

        let line = substitutor
            .line_replace("const __serviceName__ = '__SERVICE_NAME__'")
            .unwrap();
        assert_eq!(line, "const identityDb = 'IDENTITY_DB'");
    }

    #[test]
    fn test_missing_placeholder_is_fatal_and_atomic() {
        let substitutor = Substitutor::new(&service_context());

        let error = substitutor
            .line_replace("const __serviceName__ = __missingVar__")
            .unwrap_err();
        match error {
            Error::MissingReplacement { token } => assert_eq!(token, "__missingVar__"),
            other => panic!("expected MissingReplacement, got {other:?}"),
        }
    }

    #[test]
    fn test_package_prefix_literal_replaced_first() {
        let mut context = service_context();
        context.insert_str("sharedPackagePrefix", "@foobar/identity");
        let substitutor = Substitutor::new(&context);

        let line = substitutor
            .line_replace("import { q } from 'template-package/queries'")
            .unwrap();
        assert_eq!(line, "import { q } from '@foobar/identity/queries'");
    }

    #[test]
    fn test_package_prefix_literal_left_alone_without_rule() {
        let substitutor = Substitutor::new(&service_context());

        let line = substitutor
            .line_replace("import 'template-package/queries'")
            .unwrap();
        assert_eq!(line, "import 'template-package/queries'");
    }

    #[test]
    fn test_non_string_entries_do_not_register_placeholders() {
        let mut context = service_context();
        context.insert("portNumber", json!(8080));
        let substitutor = Substitutor::new(&context);

        let error = substitutor.line_replace("port: __portNumber__").unwrap_err();
        assert!(matches!(error, Error::MissingReplacement { .. }));
    }

    #[test]
    fn test_single_word_key_collision_keeps_raw_value() {
        let mut context = IdentifierContext::new();
        context.insert_str("name", "identity-db");
        let substitutor = Substitutor::new(&context);

        // kebab/camel/snake forms of "name" collapse into one token
        assert_eq!(substitutor.line_replace("__name__").unwrap(), "identity-db");
        assert_eq!(substitutor.line_replace("__Name__").unwrap(), "IdentityDb");
        assert_eq!(substitutor.line_replace("__NAME__").unwrap(), "IDENTITY_DB");
    }

    #[test]
    fn test_render_preserves_trailing_newline() {
        let substitutor = Substitutor::new(&service_context());

        let rendered = substitutor
            .render("export const __serviceName__ = 1\n// done\n")
            .unwrap();
        assert_eq!(rendered, "export const identityDb = 1\n// done\n");

        let rendered = substitutor.render("__serviceName__").unwrap();
        assert_eq!(rendered, "identityDb");
    }

    #[test]
    fn test_line_without_tokens_is_untouched() {
        let substitutor = Substitutor::new(&service_context());
        let line = "plain line with _single_ underscores";
        assert_eq!(substitutor.line_replace(line).unwrap(), line);
    }
}
