//! File loading: reads a delimited course file into a catalog

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::catalog::Catalog;
use crate::errors::{CatalogError, CatalogResult};
use crate::parser::parse_line;

/// Outcome of one load pass over a course file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Records parsed and inserted
    pub loaded: usize,
    /// Malformed records skipped with a warning
    pub skipped: usize,
}

/// Reads `path` line by line and inserts every well-formed record into
/// `catalog`. Empty lines are skipped silently; malformed lines are skipped
/// with a logged warning and counted, the load continues. There is no
/// rollback: records inserted before a read failure stay in the catalog.
///
/// # Errors
///
/// `CatalogError::FileOpen` when the file cannot be opened (catalog
/// unchanged), `CatalogError::Read` when a line cannot be read.
#[instrument(level = "debug", skip(catalog))]
pub fn load_file(path: &Path, delimiter: char, catalog: &mut Catalog) -> CatalogResult<LoadStats> {
    let file = File::open(path).map_err(|source| CatalogError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut stats = LoadStats::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line, delimiter, idx + 1) {
            Ok(course) => {
                catalog.insert(course);
                stats.loaded += 1;
            }
            Err(e) => {
                warn!(error = %e, "Skipping malformed record");
                stats.skipped += 1;
            }
        }
    }

    debug!(
        loaded = stats.loaded,
        skipped = stats.skipped,
        "Load complete"
    );
    Ok(stats)
}
