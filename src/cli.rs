//! Command-line surface: argument definitions and one handler per subcommand.

pub mod commands;
pub mod parser;
