//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `core`-unabhängig vom `app`-Layer und
//! vom Host gelesen werden.

pub mod options;

pub use options::SelectionOptions;
pub use options::{COMMAND_LOG_CAPACITY, STACK_DEPTH_WARNING};
