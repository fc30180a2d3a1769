//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine.

pub mod convert;
pub mod generate;
pub mod inspect;

pub use convert::{handle_convert_command, ConvertArgs};
pub use generate::{handle_generate_command, GenerateArgs, OutputFormat};
pub use inspect::{handle_inspect_command, InspectArgs};
