//! Course catalog planner: loads delimited course records into an ordered
//! in-memory tree and serves listing and prerequisite lookups through an
//! interactive menu.

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod parser;
pub mod shell;
pub mod util;
