//! Workflow area merging - propagates template regions into generated files
//!
//! This module implements the incremental merge step of the generation
//! workflow: scanning a template for tagged workflow areas, matching them
//! against an existing (possibly hand-edited) target by exact marker-line
//! identity, and splicing in transformed content idempotently.

pub mod area;
pub mod merger;

pub use area::*;
pub use merger::*;
