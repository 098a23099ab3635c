//! Idempotent merge of workflow areas into an existing target
//!
//! The merge is a pure function over line snapshots: it never mutates its
//! inputs and returns a new target sequence. Re-running the same merge
//! against its own output is a no-op, which keeps repeated generation runs
//! from producing spurious diffs in files a human may also be editing.

use std::path::Path;

use crate::errors::Result;
use crate::merge::area::scan_areas;

/// Merge the workflow areas of `source_lines` into `target_lines`.
///
/// Areas are scanned out of the source top to bottom; each one applying to
/// `workflow_id` is located in the target by the exact text of its BEGIN
/// and END marker lines. Source content is passed through `line_replace`
/// (fatal on failure), deduplicated against the target region's existing
/// lines, and spliced in immediately before the END marker. SORTED areas
/// additionally have their full region content blank-stripped and sorted.
///
/// A region whose markers cannot be located in the target is skipped with
/// a WARN diagnostic rather than failing the merge: the target may have
/// had its markers removed intentionally. `target_path` only labels those
/// diagnostics.
pub fn update_workflow_areas<F>(
    target_lines: &[String],
    source_lines: &[String],
    workflow_id: &str,
    line_replace: F,
    target_path: &Path,
) -> Result<Vec<String>>
where
    F: Fn(&str) -> Result<String>,
{
    let mut updated: Vec<String> = target_lines.to_vec();

    for area in scan_areas(source_lines) {
        if !area.applies_to(workflow_id) {
            tracing::debug!(
                area = %area.name,
                workflow_id = %workflow_id,
                "workflow area does not apply; leaving target untouched"
            );
            continue;
        }

        let Some(begin_idx) = updated.iter().position(|line| *line == area.begin_line) else {
            tracing::warn!(
                target_path = %target_path.display(),
                area = %area.name,
                "BEGIN marker not found in target; skipping area"
            );
            continue;
        };

        let Some(end_offset) = updated[begin_idx + 1..]
            .iter()
            .position(|line| *line == area.end_line)
        else {
            tracing::warn!(
                target_path = %target_path.display(),
                area = %area.name,
                "END marker not found in target; skipping area"
            );
            continue;
        };
        let end_idx = begin_idx + 1 + end_offset;

        let transformed: Vec<String> = area
            .content
            .iter()
            .map(|line| line_replace(line))
            .collect::<Result<_>>()?;

        let existing = &updated[begin_idx + 1..end_idx];
        let new_lines: Vec<String> = transformed
            .into_iter()
            .filter(|line| !existing.contains(line))
            .collect();

        // No new content: the region stays byte-identical
        if new_lines.is_empty() {
            continue;
        }

        let mut region: Vec<String> = existing.to_vec();
        region.extend(new_lines);

        if area.sorted {
            region.retain(|line| !line.trim().is_empty());
            region.sort();
        }

        updated.splice(begin_idx + 1..end_idx, region);
    }

    Ok(updated)
}

/// [`update_workflow_areas`] over whole-file strings, preserving the
/// target's trailing-newline state.
pub fn update_workflow_areas_text<F>(
    target: &str,
    source: &str,
    workflow_id: &str,
    line_replace: F,
    target_path: &Path,
) -> Result<String>
where
    F: Fn(&str) -> Result<String>,
{
    let target_lines: Vec<String> = target.lines().map(str::to_string).collect();
    let source_lines: Vec<String> = source.lines().map(str::to_string).collect();

    let merged = update_workflow_areas(
        &target_lines,
        &source_lines,
        workflow_id,
        line_replace,
        target_path,
    )?;

    let mut output = merged.join("\n");
    if target.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
