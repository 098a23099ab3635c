//! genweave - deterministic template instantiation and incremental merge
//!
//! This library is the template-processing core of a code-generation
//! toolchain. It derives canonical naming variants from package- and
//! path-style identifiers, substitutes them into template text, and merges
//! tagged workflow areas from templates into existing, possibly
//! hand-edited target files without duplicating previously-applied
//! content.
//!
//! The pieces compose bottom-up:
//!
//! 1. [`naming`] breaks a package name or target path into canonical parts.
//! 2. [`context`] collects those parts (and anything else the caller
//!    provides) into an [`IdentifierContext`].
//! 3. [`substitution`] builds a [`Substitutor`] from the context covering
//!    five casing variants per entry.
//! 4. [`merge`] propagates template workflow areas into a target, using
//!    the substitutor as its line transform.
//!
//! ```
//! use std::path::Path;
//! use genweave::{
//!     IdentifierContext, PackageNameOptions, Substitutor, parse_package_name,
//!     update_workflow_areas_text,
//! };
//!
//! # fn main() -> genweave::Result<()> {
//! let breakdown = parse_package_name("@foobar/identity-db", &PackageNameOptions::suffix("-db"))?;
//! let context = IdentifierContext::from(&breakdown);
//! let substitutor = Substitutor::new(&context);
//!
//! let target = "// BEGIN WORKFLOW AREA exports FOR db\n// END WORKFLOW AREA\n";
//! let template = "// BEGIN WORKFLOW AREA exports FOR db\n\
//!                 export * from 'template-package/queries'\n\
//!                 // END WORKFLOW AREA\n";
//!
//! let merged = update_workflow_areas_text(
//!     target,
//!     template,
//!     "db",
//!     |line| substitutor.line_replace(line),
//!     Path::new("src/index.ts"),
//! )?;
//! assert!(merged.contains("export * from '@foobar/identity/queries'"));
//! # Ok(())
//! # }
//! ```
//!
//! Everything here is synchronous, side-effect-free over in-memory string
//! sequences, and safe to call concurrently. File I/O, workflow
//! orchestration, and deciding which template maps to which target belong
//! to the caller.

#![deny(unsafe_code)]

pub mod context;
pub mod errors;
pub mod merge;
pub mod naming;
pub mod substitution;

pub use context::{IdentifierContext, JsonValue};
pub use errors::{Error, Result};
pub use merge::{
    WorkflowArea, scan_areas, update_workflow_areas, update_workflow_areas_text,
};
pub use naming::{
    PackageNameBreakdown, PackageNameOptions, PathBreakdown, PathOptions, parse_package_name,
    parse_path,
};
pub use substitution::{PACKAGE_PREFIX_TOKEN, Substitutor};
