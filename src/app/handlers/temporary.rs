//! Temporäre (Hover-)Selektion.

use crate::app::events::TemporarySelectionChanged;
use crate::app::SelectionManager;
use crate::core::EntityHandle;

impl SelectionManager {
    /// Setzt die temporäre Selektion; gleicher Wert ist ein No-op.
    ///
    /// Kein Highlight: die visuelle Betonung von Hover-Zuständen ist Sache
    /// des Renderers.
    pub fn set_temporary(&self, handle: Option<EntityHandle>) {
        let transition = self.temporary.borrow_mut().replace(handle);
        let Some(transition) = transition else {
            return;
        };

        log::debug!(
            "Temporäre Selektion: {:?} -> {:?}",
            transition.old,
            transition.new
        );
        self.publish(TemporarySelectionChanged {
            new: transition.new,
            old: transition.old,
            current: self.current_layer(),
        });
    }

    pub fn temporary(&self) -> Option<EntityHandle> {
        self.temporary.borrow().get().cloned()
    }

    pub fn is_temporary_selected(&self, handle: &EntityHandle) -> bool {
        self.temporary.borrow().is(handle)
    }
}
