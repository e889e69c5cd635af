//! Einzelwert-Kontexte (aktives Fenster, aktive Animation) auf dem Selektions-Bus.

use crate::app::events::{ActiveContextChanged, ActiveContextKind};
use crate::app::SelectionManager;
use crate::core::EntityHandle;

impl SelectionManager {
    /// Setzt einen aktiven Kontext; gleicher Wert ist ein No-op.
    pub fn set_active(&self, kind: ActiveContextKind, value: Option<EntityHandle>) {
        let old = {
            let mut contexts = self.contexts.borrow_mut();
            if contexts.get(&kind) == value.as_ref() {
                return;
            }
            match &value {
                Some(handle) => contexts.insert(kind, handle.clone()),
                None => contexts.remove(&kind),
            }
        };

        log::debug!("Aktiver Kontext {:?}: {:?} -> {:?}", kind, old, value);
        self.publish(ActiveContextChanged {
            kind,
            new: value,
            old,
        });
    }

    pub fn active(&self, kind: ActiveContextKind) -> Option<EntityHandle> {
        self.contexts.borrow().get(&kind).cloned()
    }

    /// Alle Kontexte, deren Wert genau dieser Handle ist.
    pub(crate) fn contexts_holding(&self, handle: &EntityHandle) -> Vec<ActiveContextKind> {
        self.contexts
            .borrow()
            .iter()
            .filter(|(_, value)| *value == handle)
            .map(|(kind, _)| *kind)
            .collect()
    }
}
