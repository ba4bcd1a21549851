//! Manual per-date edits, applied after everything else.

use demgen_core::{DataOverride, DemGenConfig, TimeSeriesPoint};

/// Prefix of the annotation left on a manually edited value.
pub const EDIT_MARKER: &str = "-- Edited by";

/// Annotation recording who edited a value and when.
pub fn edit_note(edit: &DataOverride) -> String {
    format!(
        "{EDIT_MARKER} {} on {}",
        edit.modified_by,
        edit.modified_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

pub fn apply(points: &[TimeSeriesPoint], config: &DemGenConfig) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .map(|point| {
            let mut point = point.clone();
            let Some(edit) = config.overrides.get(&point.date) else {
                return point;
            };

            if let Some(value) = edit.value {
                point.value = value;
                if !point.notes_str().contains(EDIT_MARKER) {
                    let note = edit_note(edit);
                    point.notes = Some(match point.notes.take() {
                        Some(existing) if !existing.is_empty() => format!("{existing} {note}"),
                        _ => note,
                    });
                }
            }

            if let Some(notes) = &edit.notes {
                point.notes = Some(notes.clone());
            }

            point.is_edited = true;
            point
        })
        .collect()
}
