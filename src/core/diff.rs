//! Differenz zwischen zwei Selektionszuständen.

use super::EntityHandle;
use indexmap::IndexSet;

/// Mengen-Differenz einer Mutation: was ist verschwunden, was ist neu.
///
/// `removed` steht in der Reihenfolge des alten, `added` in der des neuen
/// Zustands. Beide sind disjunkt und frei von Duplikaten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    pub removed: Vec<EntityHandle>,
    pub added: Vec<EntityHandle>,
}

impl SelectionDiff {
    /// Berechnet die Differenz zwischen zwei dichten Sequenzen.
    pub fn between(before: &[EntityHandle], after: &[EntityHandle]) -> Self {
        let before_set: IndexSet<&EntityHandle> = before.iter().collect();
        let after_set: IndexSet<&EntityHandle> = after.iter().collect();

        let removed = before_set
            .iter()
            .filter(|h| !after_set.contains(*h))
            .map(|h| (*h).clone())
            .collect();
        let added = after_set
            .iter()
            .filter(|h| !before_set.contains(*h))
            .map(|h| (*h).clone())
            .collect();

        Self { removed, added }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ModelEntity;

    #[test]
    fn test_diff_reports_removed_then_added() {
        let entities: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|n| ModelEntity::shared(n, []))
            .collect();
        let h: Vec<_> = entities.iter().map(EntityHandle::new).collect();

        let diff = SelectionDiff::between(
            &[h[0].clone(), h[1].clone(), h[2].clone()],
            &[h[0].clone(), h[3].clone(), h[2].clone()],
        );

        assert_eq!(diff.removed, vec![h[1].clone()]);
        assert_eq!(diff.added, vec![h[3].clone()]);
    }

    #[test]
    fn test_reordering_is_no_set_change() {
        let a = ModelEntity::shared("A", []);
        let b = ModelEntity::shared("B", []);
        let (ha, hb) = (EntityHandle::new(&a), EntityHandle::new(&b));

        let diff = SelectionDiff::between(&[ha.clone(), hb.clone()], &[hb, ha]);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_duplicate_still_present_is_not_removed() {
        let a = ModelEntity::shared("A", []);
        let ha = EntityHandle::new(&a);

        let diff = SelectionDiff::between(&[ha.clone(), ha.clone()], &[ha]);
        assert!(diff.is_empty());
    }
}
