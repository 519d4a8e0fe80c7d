//! Command-line front end: clap definitions and one handler per subcommand.

pub mod commands;
pub mod parser;
