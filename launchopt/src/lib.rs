//! Low-level pieces of the terminal launch command line.
//!
//! - [`scan`] matches one option against the token under a [`ParserState`]
//!   cursor, GNU style (`--name`, `--name=value`, `-x`, `-xyz`, `-ovalue`)
//! - [`Geometry`] parses X11 `WxH+X+Y` geometry strings
//! - [`split_command`] / [`join_command`] tokenize and quote shell-style
//!   command strings

mod argv;
mod geometry;
mod scan;

pub use argv::{join_command, quote_arg, split_command};
pub use geometry::{Geometry, GeometryMask, Placement};
pub use scan::{scan, ArgKind, Opt, OptionMatch, ParserState};

// ============================================================================
// Result and Error types
// ============================================================================

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    BadQuote(String),
    EmptyCommand,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BadQuote(s) => write!(f, "{}", s),
            Error::EmptyCommand => write!(f, "text was empty (or contained only whitespace)"),
        }
    }
}

impl std::error::Error for Error {}
