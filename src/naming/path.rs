//! Target path parsing and prefix/suffix convention enforcement

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Canonical identifier parts derived from a target path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathBreakdown {
    /// Grouping directory segment; equals `target_name` for single-segment paths
    pub group_name: String,
    /// Final path segment with the suffix stripped
    pub target_name: String,
    /// Absolute directory the target file lives in
    pub target_dir: PathBuf,
}

/// Options controlling [`parse_path`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathOptions {
    /// Required leading portion; must itself start with `./`
    pub required_prefix: Option<String>,
    /// Required trailing portion; must itself start with `.`
    pub required_suffix: Option<String>,
    /// Base directory `target_dir` is resolved against
    pub cwd: PathBuf,
}

/// Parse a slash-path of the form `./[prefix/][group/]target[.suffix]`.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use genweave::naming::{PathOptions, parse_path};
///
/// let options = PathOptions {
///     required_prefix: Some("./queries/".into()),
///     required_suffix: Some(".ts".into()),
///     cwd: PathBuf::from("/abs"),
/// };
/// let breakdown = parse_path("./queries/contacts/get-by-id.ts", &options).unwrap();
/// assert_eq!(breakdown.group_name, "contacts");
/// assert_eq!(breakdown.target_name, "get-by-id");
/// assert_eq!(breakdown.target_dir, PathBuf::from("/abs/queries/contacts"));
/// ```
pub fn parse_path(path: &str, options: &PathOptions) -> Result<PathBreakdown> {
    let mut remainder = path;

    if let Some(prefix) = &options.required_prefix {
        if !prefix.starts_with("./") {
            return Err(Error::configuration(format!(
                "required path prefix `{prefix}` must start with `./`"
            )));
        }
        remainder = remainder.strip_prefix(prefix.as_str()).ok_or_else(|| {
            Error::validation(format!("path `{path}` does not start with `{prefix}`"))
        })?;
    }

    if let Some(suffix) = &options.required_suffix {
        if !suffix.starts_with('.') {
            return Err(Error::configuration(format!(
                "required path suffix `{suffix}` must start with `.`"
            )));
        }
        remainder = remainder.strip_suffix(suffix.as_str()).ok_or_else(|| {
            Error::validation(format!("path `{path}` does not end with `{suffix}`"))
        })?;
    }

    let segments: Vec<&str> = remainder.split('/').collect();
    let (group_name, target_name) = match segments.as_slice() {
        [only] => ((*only).to_string(), (*only).to_string()),
        [group, target] => ((*group).to_string(), (*target).to_string()),
        _ => {
            return Err(Error::invalid_path(format!(
                "path `{path}` has more than one `/` separator after stripping conventions"
            )));
        }
    };

    let relative = path.strip_prefix("./").unwrap_or(path);
    let target_dir = options
        .cwd
        .join(relative)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| options.cwd.clone());

    Ok(PathBreakdown {
        group_name,
        target_name,
        target_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_options() -> PathOptions {
        PathOptions {
            required_prefix: Some("./queries/".into()),
            required_suffix: Some(".ts".into()),
            cwd: PathBuf::from("/abs"),
        }
    }

    #[test]
    fn test_parse_two_segment_path() {
        let breakdown = parse_path("./queries/contacts/get-by-id.ts", &query_options()).unwrap();

        assert_eq!(breakdown.group_name, "contacts");
        assert_eq!(breakdown.target_name, "get-by-id");
        assert_eq!(breakdown.target_dir, PathBuf::from("/abs/queries/contacts"));
    }

    #[test]
    fn test_parse_single_segment_path_group_equals_target() {
        let breakdown = parse_path("./queries/health-check.ts", &query_options()).unwrap();

        assert_eq!(breakdown.group_name, "health-check");
        assert_eq!(breakdown.target_name, "health-check");
        assert_eq!(breakdown.target_dir, PathBuf::from("/abs/queries"));
    }

    #[test]
    fn test_parse_without_conventions() {
        let options = PathOptions {
            cwd: PathBuf::from("/work"),
            ..PathOptions::default()
        };
        let breakdown = parse_path("contacts/index", &options).unwrap();

        assert_eq!(breakdown.group_name, "contacts");
        assert_eq!(breakdown.target_name, "index");
        assert_eq!(breakdown.target_dir, PathBuf::from("/work/contacts"));
    }

    #[test]
    fn test_prefix_not_dot_slash_is_configuration_error() {
        let options = PathOptions {
            required_prefix: Some("queries/".into()),
            ..PathOptions::default()
        };
        let error = parse_path("queries/contacts.ts", &options).unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
    }

    #[test]
    fn test_suffix_not_dotted_is_configuration_error() {
        let options = PathOptions {
            required_suffix: Some("ts".into()),
            ..PathOptions::default()
        };
        let error = parse_path("./contacts.ts", &options).unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
    }

    #[test]
    fn test_path_missing_prefix_is_validation_error() {
        let error = parse_path("./mutations/contacts/add.ts", &query_options()).unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
    }

    #[test]
    fn test_path_missing_suffix_is_validation_error() {
        let error = parse_path("./queries/contacts/add.sql", &query_options()).unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
    }

    #[test]
    fn test_too_many_segments_is_invalid_path() {
        let error =
            parse_path("./queries/a/b/get-by-id.ts", &query_options()).unwrap_err();
        assert!(matches!(error, Error::InvalidPath(_)));
    }

    #[test]
    fn test_options_deserialize_from_workflow_definition() {
        let options: PathOptions = serde_json::from_str(
            r#"{"requiredPrefix": "./queries/", "requiredSuffix": ".ts", "cwd": "/abs"}"#,
        )
        .unwrap();
        assert_eq!(options.required_prefix.as_deref(), Some("./queries/"));
        assert_eq!(options.cwd, PathBuf::from("/abs"));
    }
}
