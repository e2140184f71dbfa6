//! Record parser: one delimited line -> one Course

use tracing::instrument;

use crate::catalog::Course;
use crate::errors::{CatalogError, CatalogResult};

pub const DEFAULT_DELIMITER: char = ',';

/// Splits `line` on every delimiter occurrence: field 0 is the course code,
/// field 1 the course name, every further field one prerequisite code in
/// file order. No quoting or escaping is supported.
///
/// # Errors
///
/// Returns `CatalogError::MalformedRecord` when fewer than two fields are
/// present or the code field is empty. `line_no` is 1-based and only used
/// for error reporting.
#[instrument(level = "trace")]
pub fn parse_line(line: &str, delimiter: char, line_no: usize) -> CatalogResult<Course> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() < 2 {
        return Err(CatalogError::MalformedRecord {
            line: line_no,
            reason: format!("expected at least 2 fields, got {}", fields.len()),
        });
    }
    if fields[0].is_empty() {
        return Err(CatalogError::MalformedRecord {
            line: line_no,
            reason: "empty course code".to_string(),
        });
    }

    Ok(Course {
        code: fields[0].to_string(),
        name: fields[1].to_string(),
        // A trailing delimiter produces an empty field; drop it rather than
        // carrying an empty prerequisite code.
        prerequisites: fields[2..]
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string())
            .collect(),
    })
}
