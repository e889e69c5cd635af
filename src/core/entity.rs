//! Entities und nicht-besitzende Entity-Handles.

use super::{Capability, CapabilitySet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// Selektierbares Domänenobjekt des Modell-Layers (Part, Joint, Triade, Kurve, …).
pub trait Entity {
    /// Anzeigename für Logs und Listen
    fn name(&self) -> &str;

    /// Alle Capabilities, die diese Entity implementiert
    fn capabilities(&self) -> &CapabilitySet;

    /// Prüft, ob die Entity eine Capability besitzt.
    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }
}

/// Opaque Referenz auf eine Entity.
///
/// Der Handle besitzt die Entity nicht (Weak-Referenz); die Lebensdauer gehört
/// dem Modell-Layer. Gleichheit und Hash basieren auf der Objektidentität.
#[derive(Clone)]
pub struct EntityHandle(Weak<dyn Entity>);

impl EntityHandle {
    /// Erstellt einen Handle auf eine vom Modell-Layer gehaltene Entity.
    pub fn new<E: Entity + 'static>(entity: &Rc<E>) -> Self {
        let weak: Weak<E> = Rc::downgrade(entity);
        Self(weak)
    }

    /// Erstellt einen Handle aus einem bereits typ-gelöschten `Rc`.
    pub fn from_dyn(entity: &Rc<dyn Entity>) -> Self {
        Self(Rc::downgrade(entity))
    }

    /// Adresse der Allokation; bleibt stabil, solange ein Handle existiert.
    fn addr(&self) -> *const () {
        self.0.as_ptr() as *const ()
    }

    /// Liefert die Entity, sofern sie noch lebt.
    pub fn upgrade(&self) -> Option<Rc<dyn Entity>> {
        self.0.upgrade()
    }

    /// `false`, sobald der Modell-Layer die Entity freigegeben hat.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Capability-Test; abgelaufene Handles haben keine Capabilities.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.upgrade()
            .is_some_and(|entity| entity.has_capability(capability))
    }

    /// Anzeigename oder `None` für abgelaufene Handles.
    pub fn name(&self) -> Option<String> {
        self.upgrade().map(|entity| entity.name().to_owned())
    }
}

impl PartialEq for EntityHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for EntityHandle {}

impl Hash for EntityHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(entity) => write!(f, "EntityHandle({})", entity.name()),
            None => f.write_str("EntityHandle(<expired>)"),
        }
    }
}

/// Einfache Modell-Entity mit Namen und Capability-Menge.
#[derive(Debug, Clone)]
pub struct ModelEntity {
    name: String,
    capabilities: CapabilitySet,
}

impl ModelEntity {
    /// Erstellt eine neue Entity.
    pub fn new(name: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Erstellt die Entity direkt als geteilten Besitz des Modell-Layers.
    pub fn shared(
        name: impl Into<String>,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> Rc<Self> {
        Rc::new(Self::new(name, capabilities))
    }
}

impl Entity for ModelEntity {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}
