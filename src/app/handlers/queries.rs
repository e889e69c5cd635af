//! Capability-Abfragen für die Command-Sensitivität.

use crate::app::SelectionManager;
use crate::core::{filter, Capability, EntityHandle};

impl SelectionManager {
    /// `true`, wenn die temporäre Selektion oder irgendein Handle der aktuellen
    /// Ebene die Capability besitzt.
    pub fn is_any_selected_of_capability(&self, capability: Capability) -> bool {
        if self
            .temporary
            .borrow()
            .get()
            .is_some_and(|h| h.has_capability(capability))
        {
            return true;
        }
        self.stack
            .borrow()
            .current()
            .handles()
            .any(|h| h.has_capability(capability))
    }

    /// `true`, wenn die temporäre Selektion die Capability besitzt, oder sonst
    /// die aktuelle Ebene nicht leer ist und jeder Handle sie besitzt.
    pub fn is_only_selected_of_capability(&self, capability: Capability) -> bool {
        if self
            .temporary
            .borrow()
            .get()
            .is_some_and(|h| h.has_capability(capability))
        {
            return true;
        }

        let stack = self.stack.borrow();
        let layer = stack.current();
        !layer.is_empty() && layer.handles().all(|h| h.has_capability(capability))
    }

    /// Handles der aktuellen Ebene mit der Capability, in Selektionsreihenfolge.
    pub fn selected_of_capability(&self, capability: Capability) -> Vec<EntityHandle> {
        filter::with_capability(&self.current_layer(), capability)
    }
}
