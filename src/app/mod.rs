//! Application-Layer: Selektions-Manager, Event-Bus, Commands und Seiteneffekte.

pub mod bus;
pub mod collaborators;
pub mod command_log;
pub mod events;
pub mod guard;
mod handlers;
pub mod manager;

pub use bus::{BroadcastBus, Subscription};
pub use collaborators::{CommandSensitivity, HighlightSink};
pub use command_log::CommandLog;
pub use events::{
    ActiveContextChanged, ActiveContextKind, BusEvent, EventKind, PermanentSelectionChanged,
    SelectionCommand, SelectionStackChanged, TemporarySelectionChanged,
};
pub use guard::{SideEffect, SideEffectGuard, SuppressionScope};
pub use manager::SelectionManager;
