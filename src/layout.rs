use crate::error::CenterError;
use std::ops::Range;

/// Fixed-column layout of a coordinate record.
///
/// Gathers the record-type marker and the column span of every coordinate
/// field in one place, so a change in the file format requires one edit here
/// and none in the computation itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordLayout {
    /// Literal token a qualifying line must start with.
    pub marker: &'static str,

    /// Column spans of the x, y and z fields (0-indexed byte offsets, half-open).
    pub coord_spans: [Range<usize>; 3],
}

/// Conventional layout of heteroatom records in structure files.
pub const HETATM_LAYOUT: RecordLayout = RecordLayout {
    marker: "HETATM",
    coord_spans: [30..38, 38..46, 46..54],
};

const COORD_NAMES: [&str; 3] = ["x", "y", "z"];

impl RecordLayout {
    /// Check whether a line is a qualifying record.
    ///
    /// Only a prefix match counts: the marker appearing further into the line
    /// does not qualify it.
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(self.marker)
    }

    /// Extract the three coordinates from a qualifying line.
    ///
    /// Each field is cut out at its fixed column span, trimmed of surrounding
    /// whitespace and parsed as a float.
    ///
    /// # Errors
    /// Returns a [`CenterError::Format`] if the line is too short to hold all
    /// the spans or if a field does not parse as a number. A malformed line
    /// never contributes a partial or zero value.
    pub fn parse_coords(&self, line: &str, line_num: usize) -> Result<[f64; 3], CenterError> {
        let mut coords = [0.0; 3];

        let fields = COORD_NAMES.iter().zip(&self.coord_spans);
        for (coord, (name, span)) in coords.iter_mut().zip(fields) {
            let field = line.get(span.clone()).ok_or_else(|| CenterError::Format {
                line: line_num,
                reason: format!(
                    "record is {} bytes wide but the {name} field spans columns {}..{}",
                    line.len(),
                    span.start,
                    span.end
                ),
            })?;

            *coord = field.trim().parse().map_err(|_| CenterError::Format {
                line: line_num,
                reason: format!("the {name} field is not a number: {:?}", field.trim()),
            })?;
        }

        Ok(coords)
    }
}
