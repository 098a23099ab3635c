//! Naming convention parsing
//!
//! Breaks package-name strings (`[@organization/]service[-suffix]`) and
//! slash-paths (`./[prefix/][group/]target[.suffix]`) into the canonical
//! identifier parts the substitution table is built from, enforcing the
//! prefix/suffix conventions a workflow definition declares.

pub mod package;
pub mod path;

pub use package::*;
pub use path::*;
