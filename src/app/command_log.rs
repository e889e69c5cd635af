//! Begrenztes Command-Log für Diagnosezwecke.

use super::SelectionCommand;

/// Speichert ausgeführte Commands in Reihenfolge (als Debug-Text).
///
/// Handles werden nicht gehalten, damit das Log keine Entity-Identitäten
/// über deren Lebensdauer hinaus referenziert.
#[derive(Debug)]
pub struct CommandLog {
    entries: Vec<String>,
    max_entries: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(crate::shared::COMMAND_LOG_CAPACITY)
    }
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log mit maximaler Länge.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf `max_entries`, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &SelectionCommand) {
        if self.entries.len() >= self.max_entries {
            self.entries.drain(..self.max_entries.div_ceil(2));
        }
        self.entries.push(format!("{command:?}"));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
