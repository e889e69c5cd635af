//! Reine Filterfunktionen über Handle-Sequenzen.

use super::{Capability, EntityHandle};
use indexmap::IndexSet;

/// Entfernt Null-Einträge (z.B. leere Pick-Treffer) aus einer Rohsequenz.
pub fn non_null<I>(raw: I) -> Vec<EntityHandle>
where
    I: IntoIterator<Item = Option<EntityHandle>>,
{
    raw.into_iter().flatten().collect()
}

/// Behält nur Handles, deren Entity noch lebt.
pub fn live(handles: &[EntityHandle]) -> Vec<EntityHandle> {
    handles.iter().filter(|h| h.is_alive()).cloned().collect()
}

/// Stabile Teilsequenz aller Handles mit der Capability.
pub fn with_capability(handles: &[EntityHandle], capability: Capability) -> Vec<EntityHandle> {
    handles
        .iter()
        .filter(|h| h.has_capability(capability))
        .cloned()
        .collect()
}

/// Stabile Teilsequenz aller Handles ohne die Capability.
pub fn without_capability(handles: &[EntityHandle], capability: Capability) -> Vec<EntityHandle> {
    handles
        .iter()
        .filter(|h| !h.has_capability(capability))
        .cloned()
        .collect()
}

/// Entfernt Duplikate; das erste Vorkommen bestimmt die Reihenfolge.
pub fn dedup(handles: &[EntityHandle]) -> IndexSet<EntityHandle> {
    handles.iter().cloned().collect()
}
