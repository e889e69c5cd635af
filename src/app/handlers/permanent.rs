//! Operationen auf dem permanenten Selektions-Stapel.

use crate::app::events::{PermanentSelectionChanged, SelectionStackChanged};
use crate::app::SelectionManager;
use crate::core::{filter, EntityHandle};
use std::collections::HashSet;

impl SelectionManager {
    // ── Stapel ──────────────────────────────────────────────────────

    /// Legt eine neue leere Ebene auf (z.B. beim Öffnen eines modalen Dialogs).
    ///
    /// Die bisherige Ebene wird ausgeblendet; danach folgen
    /// `SelectionStackChanged { pushed: true }` und ein leeres
    /// `PermanentSelectionChanged`.
    pub fn push_layer(&self) {
        let (previous, depth) = {
            let mut stack = self.stack.borrow_mut();
            let previous = stack.current().to_vec();
            stack.push();
            (previous, stack.depth())
        };

        self.apply_highlight(&previous, false);

        if depth > self.options.stack_depth_warning {
            log::warn!(
                "Selektions-Stapel ist {} Ebenen tief (Warnschwelle {})",
                depth,
                self.options.stack_depth_warning
            );
        }
        log::info!("Selektionsebene aufgelegt (Tiefe {})", depth);

        self.publish(SelectionStackChanged {
            pushed: true,
            depth,
        });
        self.notify_permanent(PermanentSelectionChanged::default());
    }

    /// Entfernt die oberste Ebene und stellt die darunterliegende wieder her.
    ///
    /// Mit nur einer Ebene ein No-op (`false`).
    pub fn pop_layer(&self) -> bool {
        let popped = {
            let mut stack = self.stack.borrow_mut();
            stack
                .pop()
                .map(|old| (old.to_vec(), stack.current().to_vec(), stack.depth()))
        };

        let Some((dropped, restored, depth)) = popped else {
            log::warn!("pop_layer auf der Basisebene ignoriert");
            return false;
        };

        self.apply_highlight(&dropped, false);
        self.apply_highlight(&restored, true);
        log::info!("Selektionsebene entfernt (Tiefe {})", depth);

        self.notify_permanent(PermanentSelectionChanged {
            current: restored,
            ..Default::default()
        });
        self.publish(SelectionStackChanged {
            pushed: false,
            depth,
        });
        true
    }

    // ── Selektieren ─────────────────────────────────────────────────

    /// Setzt die aktuelle Ebene exakt auf `handles`.
    ///
    /// Bereits selektierte Handles behalten ihre Reihenfolge, neue werden
    /// angehängt. Leere Eingabe leert die Ebene.
    pub fn total_select(&self, handles: &[EntityHandle]) {
        let wanted = filter::dedup(handles);
        self.mutate_current(|layer| {
            if wanted.is_empty() {
                layer.clear();
                return;
            }

            let mut seen = HashSet::new();
            layer.retain(|h| wanted.contains(h) && seen.insert(h.clone()));
            for handle in &wanted {
                if !layer.contains(handle) {
                    layer.push(handle.clone());
                }
            }
        });
    }

    /// Wie [`SelectionManager::total_select`], für rohe Pick-Ergebnisse mit Null-Einträgen.
    pub fn total_select_picked<I>(&self, picked: I)
    where
        I: IntoIterator<Item = Option<EntityHandle>>,
    {
        self.total_select(&filter::non_null(picked));
    }

    /// Hängt alle noch nicht selektierten Handles in Argument-Reihenfolge an.
    pub fn select(&self, handles: &[EntityHandle]) {
        let candidates = filter::dedup(handles);
        self.mutate_current(|layer| {
            for handle in candidates {
                if !layer.contains(&handle) {
                    layer.push(handle);
                }
            }
        });
    }

    /// Hängt alle Handles bedingungslos an (Duplikate erlaubt).
    ///
    /// Für geordnetes Mehrrollen-Picking; soll ein Handle "nach hinten"
    /// wandern, entfernt der Aufrufer ihn vorher.
    pub fn add_select(&self, handles: &[EntityHandle]) {
        self.mutate_current(|layer| {
            for handle in handles {
                layer.push(handle.clone());
            }
        });
    }

    /// Index-adressierte Selektion (z.B. "erstes Objekt", "zweites Objekt").
    ///
    /// - `index >= len`: mit Platzhaltern bis `index` auffüllen, dann anhängen
    /// - `replace`: den Handle am Index verdrängen
    /// - sonst: am Index einfügen, Folge-Slots rücken nach hinten
    ///
    /// Ohne `replace` wird ein bereits an anderer Stelle selektierter Handle
    /// nicht entfernt; er kann dann zwei Index-Rollen belegen. Das Event meldet
    /// `added`/`removed` als Mengen-Differenz: in diesem Fall sind beide leer,
    /// nur `current` zeigt die neue Reihenfolge.
    ///
    /// Indizes, die die Ebene über [`crate::core::MAX_SLOTS`] verlängern
    /// würden, werden mit Warnung ignoriert (kein Event).
    pub fn select_at(&self, handle: &EntityHandle, index: usize, replace: bool) {
        self.mutate_current(|layer| {
            if index < layer.len() && replace {
                layer.replace(index, handle.clone());
            } else {
                layer.insert(index, handle.clone());
            }
        });
    }

    // ── Deselektieren ───────────────────────────────────────────────

    /// Entfernt jedes Vorkommen der Handles aus der aktuellen Ebene.
    pub fn unselect(&self, handles: &[EntityHandle]) {
        let doomed: HashSet<&EntityHandle> = handles.iter().collect();
        self.mutate_current(|layer| {
            layer.retain(|h| !doomed.contains(h));
        });
    }

    /// Entfernt den Slot am Index; außerhalb des Bereichs ein No-op.
    pub fn unselect_at(&self, index: usize) {
        self.mutate_current(|layer| {
            layer.remove_at(index);
        });
    }

    /// Entfernt den zuletzt selektierten Handle.
    pub fn unselect_last(&self) {
        self.mutate_current(|layer| {
            layer.pop_last();
        });
    }

    /// Leert die aktuelle Ebene.
    pub fn unselect_all(&self) {
        self.total_select(&[]);
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Lückenfreie Kopie der aktuellen Ebene.
    pub fn current_layer(&self) -> Vec<EntityHandle> {
        self.stack.borrow().current().to_vec()
    }

    /// Slot-Sicht der aktuellen Ebene inklusive Platzhaltern.
    pub fn raw_layer(&self) -> Vec<Option<EntityHandle>> {
        self.stack.borrow().current().raw()
    }

    pub fn first(&self) -> Option<EntityHandle> {
        self.stack.borrow().current().first().cloned()
    }

    pub fn last(&self) -> Option<EntityHandle> {
        self.stack.borrow().current().last().cloned()
    }

    /// Handle am Slot-Index (Platzhalter und Bereichsüberschreitung: `None`).
    pub fn at(&self, index: usize) -> Option<EntityHandle> {
        self.stack.borrow().current().at(index).cloned()
    }

    /// Anzahl selektierter Handles in der aktuellen Ebene.
    pub fn count(&self) -> usize {
        self.stack.borrow().current().count()
    }

    pub fn is_selected(&self, handle: &EntityHandle) -> bool {
        self.stack.borrow().current().contains(handle)
    }

    /// `true`, wenn der Handle in einem äußeren Kontext selektiert ist
    /// (z.B. während ein verschachtelter Dialog offen ist).
    pub fn is_in_lower_layer(&self, handle: &EntityHandle) -> bool {
        self.stack.borrow().contains_in_lower(handle)
    }

    /// Anzahl der Ebenen (immer >= 1).
    pub fn depth(&self) -> usize {
        self.stack.borrow().depth()
    }

    /// Vorbedingung für [`SelectionManager::pop_layer`].
    pub fn is_poppable(&self) -> bool {
        self.stack.borrow().is_poppable()
    }
}
