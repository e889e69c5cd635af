//! Bus-Events (ausgehend) und Selektions-Commands (eingehend).

mod command;
mod notification;

pub use command::SelectionCommand;
pub use notification::{
    ActiveContextChanged, ActiveContextKind, BusEvent, EventKind, PermanentSelectionChanged,
    SelectionStackChanged, TemporarySelectionChanged,
};
