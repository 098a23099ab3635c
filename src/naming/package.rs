//! Package name parsing and suffix convention enforcement

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Canonical identifier parts derived from a package name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageNameBreakdown {
    /// The package name exactly as supplied
    pub package_name: String,
    /// Service portion with organization and suffix stripped
    pub service_name: String,
    /// Organization portion including its sigil, or empty when absent
    pub organization_name: String,
    /// `organization/service` when an organization exists, else `service`
    pub shared_package_prefix: String,
}

/// Options controlling [`parse_package_name`]
///
/// Suffix enforcement is on by default; a caller running against fixture
/// names that intentionally break the convention passes
/// `enforce_naming: false` instead of relying on ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageNameOptions {
    /// Accepted suffixes; each must start with `-`
    pub required_suffixes: Vec<String>,
    /// Whether a missing suffix is a validation failure
    pub enforce_naming: bool,
}

impl Default for PackageNameOptions {
    fn default() -> Self {
        Self {
            required_suffixes: Vec::new(),
            enforce_naming: true,
        }
    }
}

impl PackageNameOptions {
    /// Options requiring a single suffix
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            required_suffixes: vec![suffix.into()],
            ..Self::default()
        }
    }

    /// Options requiring one of several suffixes
    pub fn suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_suffixes: suffixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Parse a package name of the form `[@organization/]service[-suffix]`.
///
/// Suffix candidates must each start with `-`; a malformed candidate is a
/// configuration defect regardless of `enforce_naming`. The first candidate
/// (in declaration order) matching the package name is stripped before the
/// remainder is split on `/`.
///
/// # Examples
/// ```
/// use genweave::naming::{PackageNameOptions, parse_package_name};
///
/// let breakdown =
///     parse_package_name("@foobar/identity-db", &PackageNameOptions::suffix("-db")).unwrap();
/// assert_eq!(breakdown.service_name, "identity");
/// assert_eq!(breakdown.organization_name, "@foobar");
/// assert_eq!(breakdown.shared_package_prefix, "@foobar/identity");
/// ```
pub fn parse_package_name(
    package_name: &str,
    options: &PackageNameOptions,
) -> Result<PackageNameBreakdown> {
    for suffix in &options.required_suffixes {
        if !suffix.starts_with('-') {
            return Err(Error::configuration(format!(
                "required package suffix `{suffix}` must start with `-`"
            )));
        }
    }

    let matched = options
        .required_suffixes
        .iter()
        .find(|suffix| package_name.ends_with(suffix.as_str()));

    if matched.is_none() && !options.required_suffixes.is_empty() && options.enforce_naming {
        return Err(Error::validation(format!(
            "package name `{package_name}` does not end with any of: {}",
            options.required_suffixes.join(", ")
        )));
    }

    let stripped = match matched {
        Some(suffix) => &package_name[..package_name.len() - suffix.len()],
        None => package_name,
    };

    let segments: Vec<&str> = stripped.split('/').collect();
    let (organization_name, service_name) = match segments.as_slice() {
        [service] => (String::new(), (*service).to_string()),
        [organization, service] => ((*organization).to_string(), (*service).to_string()),
        _ => {
            return Err(Error::invalid_name(format!(
                "package name `{package_name}` has more than one `/` separator"
            )));
        }
    };

    let shared_package_prefix = if organization_name.is_empty() {
        service_name.clone()
    } else {
        format!("{organization_name}/{service_name}")
    };

    Ok(PackageNameBreakdown {
        package_name: package_name.to_string(),
        service_name,
        organization_name,
        shared_package_prefix,
    })
}
