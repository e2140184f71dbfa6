use std::io;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::shell::Shell;

/// Builds the shell from the parsed arguments and runs the menu loop on the
/// process's standard streams.
#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    debug!(file = %cli.file.display(), delimiter = %cli.delimiter, "Starting shell");

    let mut shell = Shell::new(cli.file.clone(), cli.delimiter, cli.code.clone());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    shell.run(&mut input, &mut output)?;
    Ok(())
}
