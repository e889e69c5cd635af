//! Zentrale Ausführung von [`SelectionCommand`]s.

use crate::app::{SelectionCommand, SelectionManager};

impl SelectionManager {
    /// Führt einen Command aus und zeichnet ihn im Command-Log auf.
    pub fn execute(&self, command: SelectionCommand) {
        self.command_log.borrow_mut().record(&command);

        match command {
            // === Stapel ===
            SelectionCommand::PushLayer => self.push_layer(),
            SelectionCommand::PopLayer => {
                self.pop_layer();
            }

            // === Selektieren ===
            SelectionCommand::TotalSelect { handles } => self.total_select(&handles),
            SelectionCommand::Select { handles } => self.select(&handles),
            SelectionCommand::AddSelect { handles } => self.add_select(&handles),
            SelectionCommand::SelectAt {
                handle,
                index,
                replace,
            } => self.select_at(&handle, index, replace),

            // === Deselektieren ===
            SelectionCommand::Unselect { handles } => self.unselect(&handles),
            SelectionCommand::UnselectAt { index } => self.unselect_at(index),
            SelectionCommand::UnselectLast => self.unselect_last(),
            SelectionCommand::UnselectAll => self.unselect_all(),

            // === Temporär & Kontexte ===
            SelectionCommand::SetTemporary { handle } => self.set_temporary(handle),
            SelectionCommand::SetActiveContext { kind, value } => self.set_active(kind, value),
        }
    }
}
