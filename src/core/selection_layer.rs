//! Eine Selektionsebene: index-adressierbare, lückentolerante Handle-Sequenz.

use super::EntityHandle;
use std::collections::{BTreeMap, HashMap};

/// Maximale logische Länge einer Ebene (inklusive Lücken).
///
/// Index-Rollen in Dialogen sind einstellig; die Grenze hält Auffüllen und
/// die Slot-Sicht [`SelectionLayer::raw`] beschränkt.
pub const MAX_SLOTS: usize = 1 << 16;

/// Geordnete Selektion einer Verschachtelungsebene.
///
/// Intern eine dünn besetzte Slot-Map (`Index → Handle`) plus logische Länge.
/// Lücken entstehen nur durch Auffüllen bei [`SelectionLayer::insert`] hinter
/// dem Ende und sind nach außen unsichtbar: alle Lesezugriffe liefern die
/// dichte Reihenfolge der belegten Slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionLayer {
    /// Belegte Slots, aufsteigend nach Index
    slots: BTreeMap<usize, EntityHandle>,
    /// Logische Länge inklusive Lücken
    len: usize,
    /// Vorkommen je Handle für O(1)-Mitgliedschaftstests
    occurrences: HashMap<EntityHandle, usize>,
}

impl SelectionLayer {
    /// Erstellt eine leere Ebene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logische Länge inklusive Lücken.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Anzahl der belegten Slots.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// `true`, wenn kein Slot belegt ist (Lücken zählen nicht).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iteriert die belegten Slots in Selektionsreihenfolge.
    pub fn handles(&self) -> impl Iterator<Item = &EntityHandle> + '_ {
        self.slots.values()
    }

    /// Dichte Kopie der Selektion (ohne Lücken).
    pub fn to_vec(&self) -> Vec<EntityHandle> {
        self.slots.values().cloned().collect()
    }

    /// Slot-Sicht inklusive Lücken (`None` = Platzhalter).
    pub fn raw(&self) -> Vec<Option<EntityHandle>> {
        (0..self.len).map(|i| self.slots.get(&i).cloned()).collect()
    }

    /// Handle am Slot-Index; Lücken und Indizes hinter dem Ende liefern `None`.
    pub fn at(&self, index: usize) -> Option<&EntityHandle> {
        self.slots.get(&index)
    }

    pub fn first(&self) -> Option<&EntityHandle> {
        self.slots.values().next()
    }

    pub fn last(&self) -> Option<&EntityHandle> {
        self.slots.values().next_back()
    }

    /// O(1)-Mitgliedschaftstest.
    pub fn contains(&self, handle: &EntityHandle) -> bool {
        self.occurrences.contains_key(handle)
    }

    /// Hängt einen Handle hinten an.
    ///
    /// Bei voller Ebene ([`MAX_SLOTS`]) ein No-op mit Warnung (`false`).
    pub fn push(&mut self, handle: EntityHandle) -> bool {
        if self.len >= MAX_SLOTS {
            log::warn!("Selektionsebene voll ({} Slots), {:?} ignoriert", MAX_SLOTS, handle);
            return false;
        }
        self.track(&handle);
        self.slots.insert(self.len, handle);
        self.len += 1;
        true
    }

    /// Fügt am Index ein.
    ///
    /// Liegt `index` hinter dem Ende, wird bis `index` mit Lücken aufgefüllt
    /// und angehängt; sonst rücken alle folgenden Slots um eins nach hinten.
    /// Würde die Ebene dadurch länger als [`MAX_SLOTS`], ein No-op mit
    /// Warnung (`false`).
    pub fn insert(&mut self, index: usize, handle: EntityHandle) -> bool {
        let new_len = index.max(self.len).saturating_add(1);
        if new_len > MAX_SLOTS {
            log::warn!(
                "Slot-Index {} überschreitet die Ebenengrenze ({}), {:?} ignoriert",
                index,
                MAX_SLOTS,
                handle
            );
            return false;
        }

        if index >= self.len {
            self.len = index;
            return self.push(handle);
        }

        let tail = self.slots.split_off(&index);
        self.track(&handle);
        self.slots.insert(index, handle);
        self.slots
            .extend(tail.into_iter().map(|(slot, h)| (slot + 1, h)));
        self.len += 1;
        true
    }

    /// Ersetzt den Slot am Index und gibt den verdrängten Handle zurück.
    ///
    /// Indizes hinter dem Ende werden ignoriert (`None`, keine Änderung).
    pub fn replace(&mut self, index: usize, handle: EntityHandle) -> Option<EntityHandle> {
        if index >= self.len {
            return None;
        }
        self.track(&handle);
        let displaced = self.slots.insert(index, handle);
        if let Some(old) = &displaced {
            self.untrack(old);
        }
        displaced
    }

    /// Entfernt den Slot am Index; folgende Slots rücken nach vorne.
    ///
    /// Auch eine Lücke wird entfernt (verschiebt die Folge-Indizes), liefert
    /// dann aber `None`. Indizes hinter dem Ende sind ein No-op.
    pub fn remove_at(&mut self, index: usize) -> Option<EntityHandle> {
        if index >= self.len {
            return None;
        }

        let mut tail = self.slots.split_off(&index);
        let removed = tail.remove(&index);
        self.slots
            .extend(tail.into_iter().map(|(slot, h)| (slot - 1, h)));
        self.len -= 1;

        if let Some(old) = &removed {
            self.untrack(old);
        }
        removed
    }

    /// Entfernt den letzten belegten Slot.
    pub fn pop_last(&mut self) -> Option<EntityHandle> {
        let last_index = *self.slots.keys().next_back()?;
        self.remove_at(last_index)
    }

    /// Entfernt jedes Vorkommen des Handles und gibt die Anzahl zurück.
    pub fn remove_all(&mut self, handle: &EntityHandle) -> usize {
        if !self.contains(handle) {
            return 0;
        }
        self.retain(|h| h != handle).len()
    }

    /// Behält nur Slots, für die `keep` gilt; entfernte Handles in alter Reihenfolge.
    ///
    /// Die relative Lage der Lücken bleibt erhalten.
    pub fn retain(&mut self, mut keep: impl FnMut(&EntityHandle) -> bool) -> Vec<EntityHandle> {
        let mut removed = Vec::new();
        let old_slots = std::mem::take(&mut self.slots);

        for (slot, handle) in old_slots {
            if keep(&handle) {
                self.slots.insert(slot - removed.len(), handle);
            } else {
                removed.push(handle);
            }
        }

        self.len -= removed.len();
        for handle in &removed {
            self.untrack(handle);
        }
        removed
    }

    /// Leert die Ebene vollständig (inklusive Lücken).
    pub fn clear(&mut self) {
        self.slots.clear();
        self.occurrences.clear();
        self.len = 0;
    }

    fn track(&mut self, handle: &EntityHandle) {
        *self.occurrences.entry(handle.clone()).or_default() += 1;
    }

    fn untrack(&mut self, handle: &EntityHandle) {
        if let Some(count) = self.occurrences.get_mut(handle) {
            *count -= 1;
            if *count == 0 {
                self.occurrences.remove(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests;
