use super::ActiveContextKind;
use crate::core::EntityHandle;

/// Commands sind mutierende Selektionsschritte, die zentral ausgeführt werden.
///
/// UI-Command-Code kann statt der Einzelmethoden einen Command an
/// [`crate::SelectionManager::execute`] übergeben; dieser landet zusätzlich
/// im Command-Log.
#[derive(Debug, Clone)]
pub enum SelectionCommand {
    /// Neue (leere) Selektionsebene auflegen
    PushLayer,
    /// Oberste Selektionsebene entfernen
    PopLayer,
    /// Aktuelle Ebene exakt auf diese Handles setzen
    TotalSelect { handles: Vec<EntityHandle> },
    /// Noch nicht selektierte Handles anhängen
    Select { handles: Vec<EntityHandle> },
    /// Handles bedingungslos anhängen (Duplikate erlaubt)
    AddSelect { handles: Vec<EntityHandle> },
    /// Handle an Index einfügen oder ersetzen
    SelectAt {
        handle: EntityHandle,
        index: usize,
        replace: bool,
    },
    /// Handles aus der aktuellen Ebene entfernen
    Unselect { handles: Vec<EntityHandle> },
    /// Slot am Index entfernen
    UnselectAt { index: usize },
    /// Letzten selektierten Handle entfernen
    UnselectLast,
    /// Aktuelle Ebene leeren
    UnselectAll,
    /// Temporäre Selektion setzen oder löschen
    SetTemporary { handle: Option<EntityHandle> },
    /// Aktiven Kontext setzen oder löschen
    SetActiveContext {
        kind: ActiveContextKind,
        value: Option<EntityHandle>,
    },
}
