//! Stapel von Selektionsebenen für verschachtelte Selektionskontexte.

use super::{EntityHandle, SelectionLayer};

/// Nie leerer Stapel von [`SelectionLayer`]s.
///
/// Die Basisebene ist fest, verschachtelte Ebenen (z.B. für modale
/// Unterauswahl in Dialogen) liegen darüber. Die aktuelle Ebene ist immer die
/// oberste.
#[derive(Debug, Clone, Default)]
pub struct SelectionStack {
    base: SelectionLayer,
    nested: Vec<SelectionLayer>,
}

impl SelectionStack {
    /// Erstellt einen Stapel mit genau einer leeren Ebene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Ebenen (immer >= 1).
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// `true`, wenn über der Basisebene noch eine Ebene liegt.
    pub fn is_poppable(&self) -> bool {
        !self.nested.is_empty()
    }

    pub fn current(&self) -> &SelectionLayer {
        self.nested.last().unwrap_or(&self.base)
    }

    pub fn current_mut(&mut self) -> &mut SelectionLayer {
        self.nested.last_mut().unwrap_or(&mut self.base)
    }

    /// Legt eine neue leere Ebene oben auf.
    pub fn push(&mut self) {
        self.nested.push(SelectionLayer::new());
    }

    /// Entfernt die oberste Ebene; die Basisebene bleibt immer erhalten.
    pub fn pop(&mut self) -> Option<SelectionLayer> {
        self.nested.pop()
    }

    /// Alle Ebenen unterhalb der aktuellen, von unten nach oben.
    pub fn lower_layers(&self) -> impl Iterator<Item = &SelectionLayer> + '_ {
        let below = self.nested.len().saturating_sub(1);
        let has_nested = !self.nested.is_empty();
        has_nested
            .then_some(&self.base)
            .into_iter()
            .chain(self.nested[..below].iter())
    }

    /// Prüft, ob der Handle in einem äußeren Kontext selektiert ist.
    pub fn contains_in_lower(&self, handle: &EntityHandle) -> bool {
        self.lower_layers().any(|layer| layer.contains(handle))
    }

    /// Entfernt den Handle still aus allen unteren Ebenen.
    ///
    /// Gibt die Anzahl der entfernten Vorkommen zurück.
    pub fn remove_from_lower(&mut self, handle: &EntityHandle) -> usize {
        let Some((_, below)) = self.nested.split_last_mut() else {
            return 0;
        };
        below
            .iter_mut()
            .chain(std::iter::once(&mut self.base))
            .map(|layer| layer.remove_all(handle))
            .sum()
    }
}
