//! Reaktion auf Entities, die der Modell-Layer gleich zerstört.

use crate::app::events::ActiveContextKind;
use crate::app::SelectionManager;
use crate::core::EntityHandle;

impl SelectionManager {
    /// Muss genau einmal pro Entity aufgerufen werden, bevor sie ungültig wird.
    ///
    /// Ist die Entity irgendwo selektiert, wird sie im "Disconnecting"-Zustand
    /// aus allen Ebenen, der temporären Selektion und den aktiven Kontexten
    /// entfernt. Events laufen normal, Highlight-Aufrufe sind unterdrückt,
    /// weil das Renderable bereits abgebaut wird.
    pub fn on_entity_about_to_be_destroyed(&self, handle: &EntityHandle) {
        let (in_current, in_lower) = {
            let stack = self.stack.borrow();
            (
                stack.current().contains(handle),
                stack.contains_in_lower(handle),
            )
        };
        let is_temporary = self.is_temporary_selected(handle);
        let contexts = self.contexts_holding(handle);

        if !in_current && !in_lower && !is_temporary && contexts.is_empty() {
            return;
        }

        let _teardown = self.guard.enter_teardown();
        log::info!("Entferne zerstörte Entity {:?} aus der Selektion", handle);

        if in_lower {
            let removed = self.stack.borrow_mut().remove_from_lower(handle);
            log::debug!("{} Vorkommen aus äußeren Ebenen entfernt", removed);
        }
        if in_current {
            self.mutate_current(|layer| layer.remove_all(handle));
        }
        if is_temporary {
            self.set_temporary(None);
        }
        for kind in sorted(contexts) {
            self.set_active(kind, None);
        }
    }
}

/// Feste Reihenfolge der Kontext-Events unabhängig von der HashMap-Iteration.
fn sorted(mut kinds: Vec<ActiveContextKind>) -> Vec<ActiveContextKind> {
    kinds.sort_by_key(|kind| match kind {
        ActiveContextKind::Window => 0,
        ActiveContextKind::Animation => 1,
    });
    kinds
}
