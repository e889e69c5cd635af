//! Temporäre (Hover-)Selektion: höchstens ein flüchtiger Handle.

use super::EntityHandle;

/// Übergang der temporären Selektion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryTransition {
    pub old: Option<EntityHandle>,
    pub new: Option<EntityHandle>,
}

/// Hält den aktuell "gehoverten" Handle, unabhängig vom Selektions-Stapel.
#[derive(Debug, Clone, Default)]
pub struct TemporarySelection {
    handle: Option<EntityHandle>,
}

impl TemporarySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&EntityHandle> {
        self.handle.as_ref()
    }

    /// Prüft, ob genau dieser Handle temporär selektiert ist.
    pub fn is(&self, handle: &EntityHandle) -> bool {
        self.handle.as_ref() == Some(handle)
    }

    /// Setzt den Handle; liefert den Übergang nur bei tatsächlicher Änderung.
    pub fn replace(&mut self, handle: Option<EntityHandle>) -> Option<TemporaryTransition> {
        if self.handle == handle {
            return None;
        }
        let old = std::mem::replace(&mut self.handle, handle.clone());
        Some(TemporaryTransition { old, new: handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ModelEntity;

    #[test]
    fn test_replace_reports_only_changes() {
        let a = ModelEntity::shared("A", []);
        let ha = EntityHandle::new(&a);
        let mut temporary = TemporarySelection::new();

        assert_eq!(temporary.replace(None), None);

        let transition = temporary.replace(Some(ha.clone()));
        assert_eq!(
            transition,
            Some(TemporaryTransition {
                old: None,
                new: Some(ha.clone()),
            })
        );
        assert!(temporary.is(&ha));
        assert_eq!(temporary.replace(Some(ha.clone())), None);

        let cleared = temporary.replace(None);
        assert_eq!(
            cleared,
            Some(TemporaryTransition {
                old: Some(ha),
                new: None,
            })
        );
        assert!(temporary.get().is_none());
    }
}
