//! Runtime configuration
//!
//! A `panel.toml` is embedded in the firmware and parsed at boot by a
//! minimal no_std parser.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
