//! Selektions-Manager: zentrale Service-Instanz mit Change-Notifier.
//!
//! Alle Mutationen der aktuellen Ebene laufen über [`SelectionManager::mutate_current`],
//! das die Differenz zum vorherigen Zustand bildet, Highlights umschaltet,
//! genau ein Event publiziert und danach die Command-Sensitivität auffrischt.
//! Die Operationen selbst sind in `handlers/` nach Bereich aufgeteilt.

use super::bus::BroadcastBus;
use super::collaborators::{CommandSensitivity, HighlightSink};
use super::command_log::CommandLog;
use super::events::{ActiveContextKind, BusEvent, PermanentSelectionChanged};
use super::guard::{SideEffect, SideEffectGuard, SuppressionScope};
use crate::core::{EntityHandle, SelectionDiff, SelectionLayer, SelectionStack, TemporarySelection};
use crate::shared::SelectionOptions;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Selektions-Service des Editors.
///
/// Wird einmal beim Start erstellt und per `Rc` an alle Kollaborateure
/// verteilt. Alle Methoden nehmen `&self`; intern wird nie ein Borrow über
/// einen Aufruf nach außen (Listener, Renderer, Commands) gehalten, daher
/// dürfen Listener re-entrant weitere Selektionsänderungen auslösen.
pub struct SelectionManager {
    pub(super) stack: RefCell<SelectionStack>,
    pub(super) temporary: RefCell<TemporarySelection>,
    pub(super) contexts: RefCell<HashMap<ActiveContextKind, EntityHandle>>,
    pub(super) bus: BroadcastBus,
    pub(super) guard: Rc<SideEffectGuard>,
    pub(super) command_log: RefCell<CommandLog>,
    pub(super) options: SelectionOptions,
    highlight: RefCell<Option<Rc<dyn HighlightSink>>>,
    sensitivity: RefCell<Option<Rc<dyn CommandSensitivity>>>,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new(SelectionOptions::default())
    }
}

impl SelectionManager {
    /// Erstellt einen Manager mit einer leeren Basisebene.
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            stack: RefCell::new(SelectionStack::new()),
            temporary: RefCell::new(TemporarySelection::new()),
            contexts: RefCell::new(HashMap::new()),
            bus: BroadcastBus::new(),
            guard: SideEffectGuard::new(),
            command_log: RefCell::new(CommandLog::with_capacity(options.command_log_capacity)),
            options,
            highlight: RefCell::new(None),
            sensitivity: RefCell::new(None),
        }
    }

    /// Verbindet den Renderer für Highlight-Aufrufe.
    pub fn set_highlight_sink(&self, sink: Rc<dyn HighlightSink>) {
        *self.highlight.borrow_mut() = Some(sink);
    }

    /// Verbindet die Command-Sensitivitäts-Auffrischung.
    pub fn set_command_sensitivity(&self, sensitivity: Rc<dyn CommandSensitivity>) {
        *self.sensitivity.borrow_mut() = Some(sensitivity);
    }

    /// Event-Bus für Abonnements.
    pub fn bus(&self) -> &BroadcastBus {
        &self.bus
    }

    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Unterdrückt Seiteneffekte bis zum Drop des Scopes (z.B. für Batch-Aktionen).
    pub fn suppress(&self, effects: &[SideEffect]) -> SuppressionScope {
        self.guard.suppress(effects)
    }

    /// `true` während der Reaktion auf eine zerstörte Entity.
    pub fn is_disconnecting(&self) -> bool {
        self.guard.is_disconnecting()
    }

    /// Kopie der Command-Log-Einträge.
    pub fn command_log_entries(&self) -> Vec<String> {
        self.command_log.borrow().entries().to_vec()
    }

    // ── Change-Notifier ─────────────────────────────────────────────

    /// Führt eine Mutation auf der aktuellen Ebene aus und benachrichtigt genau
    /// einmal, falls sich die dichte Sequenz geändert hat.
    pub(super) fn mutate_current<R>(&self, mutation: impl FnOnce(&mut SelectionLayer) -> R) -> R {
        let (result, before, after) = {
            let mut stack = self.stack.borrow_mut();
            let layer = stack.current_mut();
            let before = layer.to_vec();
            let result = mutation(layer);
            (result, before, layer.to_vec())
        };

        if before != after {
            let diff = SelectionDiff::between(&before, &after);
            // Erst ausschalten, dann einschalten: kein Flackern im selben Frame
            self.apply_highlight(&diff.removed, false);
            self.apply_highlight(&diff.added, true);
            self.notify_permanent(PermanentSelectionChanged {
                current: after,
                added: diff.added,
                removed: diff.removed,
            });
        }

        result
    }

    /// Publiziert eine permanente Änderung und frischt danach die Commands auf.
    pub(super) fn notify_permanent(&self, event: PermanentSelectionChanged) {
        log::debug!(
            "Selektion geändert: {} aktuell, +{} / -{}",
            event.current.len(),
            event.added.len(),
            event.removed.len()
        );
        self.publish(event);
        self.refresh_sensitivity();
    }

    pub(super) fn publish<E: BusEvent>(&self, event: E) {
        self.bus.publish(event);
    }

    /// Schaltet Highlights, sofern weder Optionen noch Guard dagegen sprechen.
    pub(super) fn apply_highlight(&self, handles: &[EntityHandle], on: bool) {
        if handles.is_empty()
            || !self.options.highlight_enabled
            || self.guard.is_suppressed(SideEffect::Highlight)
        {
            return;
        }
        let Some(sink) = self.highlight.borrow().clone() else {
            return;
        };
        for handle in handles {
            sink.set_highlight(handle, on);
        }
    }

    fn refresh_sensitivity(&self) {
        if !self.options.refresh_sensitivity
            || self.guard.is_suppressed(SideEffect::SensitivityRefresh)
        {
            return;
        }
        let sensitivity = self.sensitivity.borrow().clone();
        if let Some(sensitivity) = sensitivity {
            sensitivity.recompute_all();
        }
    }
}
