//! Interactive shell: fixed numbered menu over generic reader/writer streams

use std::io::{BufRead, Write};
use std::path::PathBuf;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::errors::CatalogResult;
use crate::loader::load_file;

const WELCOME: &str = "\
**********************************
*                                *
* Welcome to the course planner! *
*                                *
**********************************";

const FAREWELL: &str = "\
*******************************************
*                                         *
* Thank you for using the course planner! *
*                                         *
*******************************************";

const MENU: &str = "\
=============================
            Menu
[1] Load course catalog.
[2] Print course list.
[3] Print course.
[9] Exit.
=============================";

/// Menu loop around a caller-owned catalog. The shell reads choices from a
/// generic `BufRead` and writes all output to a generic `Write`, so tests
/// can drive it with in-memory buffers.
pub struct Shell {
    catalog: Catalog,
    data_path: PathBuf,
    delimiter: char,
    /// Remembered course code, seeded from the CLI and updated on lookup.
    /// Never queried automatically.
    lookup_code: Option<String>,
}

impl Shell {
    pub fn new(data_path: PathBuf, delimiter: char, lookup_code: Option<String>) -> Self {
        Self {
            catalog: Catalog::new(),
            data_path,
            delimiter,
            lookup_code,
        }
    }

    /// Runs the menu loop until the user chooses exit or input reaches EOF.
    ///
    /// # Errors
    ///
    /// Only stream I/O failures propagate; load failures and lookup misses
    /// are reported as messages and return to the menu.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> CatalogResult<()> {
        writeln!(output, "{}", WELCOME)?;

        loop {
            writeln!(output, "\n{}", MENU)?;
            write!(output, "\nWhat would you like to do? ")?;
            output.flush()?;

            let Some(choice) = read_line(input)? else {
                break;
            };
            debug!(%choice, "Menu choice");
            writeln!(output)?;

            match choice.as_str() {
                "1" => self.cmd_load(output)?,
                "2" => self.cmd_list(output)?,
                "3" => self.cmd_prompt_lookup(input, output)?,
                "9" => {
                    writeln!(output, "{}", FAREWELL)?;
                    break;
                }
                _ => writeln!(output, "Invalid entry: Please try again.")?,
            }
        }
        Ok(())
    }

    fn cmd_load<W: Write>(&mut self, output: &mut W) -> CatalogResult<()> {
        match load_file(&self.data_path, self.delimiter, &mut self.catalog) {
            Ok(stats) => {
                writeln!(
                    output,
                    "Success! Loaded {} course(s) from {}.",
                    stats.loaded,
                    self.data_path.display()
                )?;
                if stats.skipped > 0 {
                    writeln!(output, "Skipped {} malformed record(s).", stats.skipped)?;
                }
            }
            Err(e) => {
                writeln!(output, "Could not load {}: {}", self.data_path.display(), e)?;
            }
        }
        Ok(())
    }

    fn cmd_list<W: Write>(&mut self, output: &mut W) -> CatalogResult<()> {
        writeln!(output, "Course List:")?;
        for course in self.catalog.iter() {
            writeln!(output, "{}", course)?;
        }
        Ok(())
    }

    fn cmd_prompt_lookup<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> CatalogResult<()> {
        write!(output, "Which course would you like to know about? ")?;
        output.flush()?;

        let entered = read_line(input)?.unwrap_or_default();
        let code = if entered.is_empty() {
            self.lookup_code.clone()
        } else {
            self.lookup_code = Some(entered.clone());
            Some(entered)
        };
        writeln!(output)?;

        match code {
            Some(code) => self.cmd_lookup(&code, output),
            None => Ok(writeln!(output, "No course code given.")?),
        }
    }

    fn cmd_lookup<W: Write>(&self, code: &str, output: &mut W) -> CatalogResult<()> {
        match self.catalog.find(code) {
            Some(course) => {
                writeln!(output, "{}", course)?;
                let prereqs = if course.prerequisites.is_empty() {
                    "NONE".to_string()
                } else {
                    course.prerequisites.iter().join(", ")
                };
                writeln!(output, "Prerequisite(s): {}", prereqs)?;
            }
            None => writeln!(output, "{} not found.", code)?,
        }
        Ok(())
    }
}

/// Reads one line, trimmed. Returns None at EOF.
fn read_line<R: BufRead>(input: &mut R) -> CatalogResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
