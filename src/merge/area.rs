//! Workflow area markers and template scanning
//!
//! A workflow area is a span of template text bounded by marker lines:
//!
//! ```text
//! // BEGIN SORTED WORKFLOW AREA imports FOR db api
//! import { __camelName__ } from 'template-package/__kebab-name__'
//! // END WORKFLOW AREA
//! ```
//!
//! Markers are recognized as line *suffixes*, so the grammar works behind
//! any comment syntax (`//`, `#`, `--`, `<!--` ...) without special-casing
//! the host language.

use once_cell::sync::Lazy;
use regex::Regex;

static BEGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"BEGIN (SORTED )?WORKFLOW AREA (\S+) FOR (.+)$").unwrap());
static END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"END WORKFLOW AREA$").unwrap());

/// One tagged region scanned out of a template.
///
/// The exact `begin_line`/`end_line` text is the join key used to locate
/// the corresponding region in a target file, so an area's name and
/// FOR-list must make its markers unique within that file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowArea {
    /// Area name from the BEGIN marker
    pub name: String,
    /// Whether merged content is normalized to sorted order
    pub sorted: bool,
    /// Workflow ids this area applies to
    pub workflow_ids: Vec<String>,
    /// Exact text of the BEGIN marker line
    pub begin_line: String,
    /// Exact text of the END marker line
    pub end_line: String,
    /// Content lines between the markers, untransformed
    pub content: Vec<String>,
}

impl WorkflowArea {
    /// Whether this area applies to the given workflow id
    pub fn applies_to(&self, workflow_id: &str) -> bool {
        self.workflow_ids.iter().any(|id| id == workflow_id)
    }
}

/// Whether a line closes a workflow area
pub fn is_end_marker(line: &str) -> bool {
    END_RE.is_match(line)
}

/// Parse a BEGIN marker line into an area with empty content
fn parse_begin_marker(line: &str) -> Option<WorkflowArea> {
    let caps = BEGIN_RE.captures(line)?;
    Some(WorkflowArea {
        name: caps[2].to_string(),
        sorted: caps.get(1).is_some(),
        workflow_ids: caps[3].split_whitespace().map(str::to_string).collect(),
        begin_line: line.to_string(),
        end_line: String::new(),
        content: Vec::new(),
    })
}

/// Scan template lines for workflow areas, top to bottom.
///
/// The scanner has two states: outside an area, where only a BEGIN marker
/// is significant, and inside one, where every line is accumulated as
/// content until the END marker. A BEGIN without a matching END before end
/// of input is dropped with a diagnostic.
pub fn scan_areas(source_lines: &[String]) -> Vec<WorkflowArea> {
    let mut areas = Vec::new();
    let mut open: Option<WorkflowArea> = None;

    for line in source_lines {
        match open.take() {
            None => {
                open = parse_begin_marker(line);
            }
            Some(mut area) => {
                if is_end_marker(line) {
                    area.end_line = line.clone();
                    areas.push(area);
                } else {
                    area.content.push(line.clone());
                    open = Some(area);
                }
            }
        }
    }

    if let Some(area) = open {
        tracing::warn!(
            area = %area.name,
            "workflow area has no END marker before end of template; dropping it"
        );
    }

    areas
}
