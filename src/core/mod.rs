//! Core-Domänentypen: Entity-Handles, Capabilities, Selektionsebenen und -stapel.
//!
//! Alles hier ist reine Datenhaltung ohne Benachrichtigung; Events und
//! Seiteneffekte liegen im `app`-Layer.

pub mod capability;
pub mod diff;
pub mod entity;
pub mod filter;
pub mod selection_layer;
pub mod selection_stack;
pub mod temporary;

pub use capability::{Capability, CapabilitySet};
pub use diff::SelectionDiff;
pub use entity::{Entity, EntityHandle, ModelEntity};
pub use selection_layer::{SelectionLayer, MAX_SLOTS};
pub use selection_stack::SelectionStack;
pub use temporary::{TemporarySelection, TemporaryTransition};
