//! Schnittstellen zu externen Kollaborateuren (Renderer, Command-Sensitivität).

use crate::core::EntityHandle;

/// Renderer-Seite: schaltet die Selektions-Hervorhebung einer Entity.
pub trait HighlightSink {
    fn set_highlight(&self, handle: &EntityHandle, on: bool);
}

/// UI-Commands: berechnet Enabled/Disabled-Zustände aller Commands neu.
pub trait CommandSensitivity {
    fn recompute_all(&self);
}
