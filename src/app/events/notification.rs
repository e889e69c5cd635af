use crate::core::EntityHandle;
use std::any::Any;
use std::fmt;

/// Stabile, aufzählbare Art eines Bus-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Die aktuelle permanente Selektionsebene hat sich geändert
    PermanentSelectionChanged,
    /// Die temporäre (Hover-)Selektion hat sich geändert
    TemporarySelectionChanged,
    /// Eine Selektionsebene wurde aufgelegt oder entfernt
    SelectionStackChanged,
    /// Ein Einzelwert-Kontext (aktives Fenster, aktive Animation) hat sich geändert
    ActiveContextChanged,
}

/// Gemeinsame Schnittstelle aller Events, die über den Bus laufen.
pub trait BusEvent: Any + fmt::Debug {
    fn kind(&self) -> EventKind;

    /// Für typisierte Zustellung per Downcast.
    fn as_any(&self) -> &dyn Any;
}

/// Änderung der aktuellen permanenten Selektion.
///
/// Alle Listen sind lückenfrei; `added` und `removed` sind disjunkt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermanentSelectionChanged {
    /// Vollständiger Inhalt der aktuellen Ebene nach der Mutation
    pub current: Vec<EntityHandle>,
    /// Seit dem letzten Event neu selektiert
    pub added: Vec<EntityHandle>,
    /// Seit dem letzten Event deselektiert
    pub removed: Vec<EntityHandle>,
}

impl BusEvent for PermanentSelectionChanged {
    fn kind(&self) -> EventKind {
        EventKind::PermanentSelectionChanged
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wechsel der temporären Selektion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporarySelectionChanged {
    pub new: Option<EntityHandle>,
    pub old: Option<EntityHandle>,
    /// Aktuelle permanente Ebene zum Zeitpunkt des Wechsels
    pub current: Vec<EntityHandle>,
}

impl BusEvent for TemporarySelectionChanged {
    fn kind(&self) -> EventKind {
        EventKind::TemporarySelectionChanged
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Push oder Pop auf dem Selektions-Stapel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStackChanged {
    /// `true` bei Push, `false` bei Pop
    pub pushed: bool,
    /// Stapeltiefe nach der Änderung
    pub depth: usize,
}

impl BusEvent for SelectionStackChanged {
    fn kind(&self) -> EventKind {
        EventKind::SelectionStackChanged
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Einzelwert-Kontexte, die denselben Bus nutzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveContextKind {
    /// Aktives Viewer-/Graph-Fenster
    Window,
    /// Aktive Ergebnis-Animation
    Animation,
}

/// Wechsel eines aktiven Kontexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContextChanged {
    pub kind: ActiveContextKind,
    pub new: Option<EntityHandle>,
    pub old: Option<EntityHandle>,
}

impl BusEvent for ActiveContextChanged {
    fn kind(&self) -> EventKind {
        EventKind::ActiveContextChanged
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
