//! Selektions- und Change-Benachrichtigungs-Subsystem des Mechanik-Modell-Editors.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActiveContextChanged, ActiveContextKind, BroadcastBus, BusEvent, CommandSensitivity,
    EventKind, HighlightSink, PermanentSelectionChanged, SelectionCommand, SelectionManager,
    SelectionStackChanged, SideEffect, Subscription, SuppressionScope, TemporarySelectionChanged,
};
pub use core::{
    filter, Capability, CapabilitySet, Entity, EntityHandle, ModelEntity, SelectionDiff,
    SelectionLayer, SelectionStack, TemporarySelection,
};
pub use shared::SelectionOptions;
