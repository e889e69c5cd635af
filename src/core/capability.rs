//! Capability-Tags für selektierbare Entities.
//!
//! Statt konkrete Typen per Laufzeit-Cast zu prüfen, fragt Command-Code nur,
//! ob eine Entity eine bestimmte Fähigkeit besitzt.

use std::collections::BTreeSet;
use std::fmt;

/// Marker für eine abfragbare Fähigkeit einer Entity.
///
/// Tags sind offen: unbekannte Tags sind gültig und liefern bei Abfragen
/// einfach keinen Treffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capability(&'static str);

impl Capability {
    /// Entity kann in Listen-Ansichten dargestellt werden
    pub const LIST_VIEW: Capability = Capability("list_view");
    /// Starrer oder elastischer Körper
    pub const PART: Capability = Capability("part");
    /// Gelenk zwischen Triaden
    pub const JOINT: Capability = Capability("joint");
    /// Knotenpunkt mit Koordinatensystem
    pub const TRIAD: Capability = Capability("triad");
    /// Kurve (z.B. Führungskurve für Gleitgelenke)
    pub const CURVE: Capability = Capability("curve");
    /// Baugruppe / Sub-Assembly
    pub const ASSEMBLY: Capability = Capability("assembly");
    /// Last oder Kraft
    pub const LOAD: Capability = Capability("load");
    /// Ergebnis-Animation
    pub const ANIMATION: Capability = Capability("animation");
    /// Verschiebbar im 3D-Viewer
    pub const MOVABLE: Capability = Capability("movable");

    /// Erstellt einen projektspezifischen Tag.
    pub const fn custom(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Gibt den Tag-Namen zurück.
    pub fn tag(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Menge der Capabilities einer Entity (sortiert, deterministisch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Builder-Variante von [`CapabilitySet::insert`].
    pub fn with(mut self, capability: Capability) -> Self {
        self.insert(capability);
        self
    }

    /// Fügt eine Capability hinzu. Gibt `false` zurück, wenn sie schon vorhanden war.
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    /// Prüft die Mitgliedschaft einer Capability.
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(capabilities: [Capability; N]) -> Self {
        capabilities.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_set_membership() {
        let set = CapabilitySet::from([Capability::PART, Capability::LIST_VIEW]);

        assert!(set.contains(Capability::PART));
        assert!(set.contains(Capability::LIST_VIEW));
        assert!(!set.contains(Capability::JOINT));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_custom_tag_yields_no_match() {
        let set = CapabilitySet::new().with(Capability::TRIAD);

        assert!(!set.contains(Capability::custom("gibt_es_nicht")));
    }

    #[test]
    fn test_custom_tag_equals_same_literal() {
        let strain_gage = Capability::custom("strain_gage");
        let set = CapabilitySet::new().with(strain_gage);

        assert!(set.contains(Capability::custom("strain_gage")));
        assert_eq!(strain_gage.to_string(), "strain_gage");
    }
}
