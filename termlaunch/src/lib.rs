//! Launch specifications for a tabbed terminal: which windows to open, with
//! which tabs, parsed from a command line.
//!
//! The same parse serves a fresh process and a running instance that
//! received a forwarded command line, so [`AttributeList`] is the contract
//! between the two.

pub mod attrs;
pub mod builder;
pub mod color;
pub mod error;
pub mod options;
pub mod prefs;
pub mod realize;
pub mod restart;

pub use attrs::{AttributeList, DynamicTitleMode, TabAttr, Visibility, WindowAttr};
pub use builder::{parse_attributes, LaunchDefaults};
pub use error::{LaunchError, ParseError, Result, UnknownOption};
pub use options::GlobalOptions;
pub use prefs::Preferences;
pub use realize::{realize, PlanPrinter, Screen, WindowOpener};
