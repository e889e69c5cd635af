//! Unterdrückung von Seiteneffekten über RAII-Scopes.
//!
//! Ersetzt ein nacktes "disconnecting"-Flag: jeder Scope zählt seine
//! Seiteneffekte hoch und beim Drop wieder herunter, dadurch sind
//! verschachtelte (re-entrante) Scopes korrekt.

use std::cell::Cell;
use std::rc::Rc;

/// Unterdrückbare Seiteneffekte des Selektions-Managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideEffect {
    /// `HighlightSink::set_highlight`-Aufrufe
    Highlight,
    /// `CommandSensitivity::recompute_all`-Aufrufe
    SensitivityRefresh,
}

impl SideEffect {
    const ALL: [SideEffect; 2] = [SideEffect::Highlight, SideEffect::SensitivityRefresh];

    fn slot(self) -> usize {
        match self {
            SideEffect::Highlight => 0,
            SideEffect::SensitivityRefresh => 1,
        }
    }
}

/// Zähler aktiver Unterdrückungen je Seiteneffekt.
#[derive(Debug, Default)]
pub struct SideEffectGuard {
    suppressed: [Cell<usize>; SideEffect::ALL.len()],
    teardown_depth: Cell<usize>,
}

impl SideEffectGuard {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// `true`, solange mindestens ein Scope den Seiteneffekt unterdrückt.
    pub fn is_suppressed(&self, effect: SideEffect) -> bool {
        self.suppressed[effect.slot()].get() > 0
    }

    /// `true` während der Reaktion auf eine zerstörte Entity.
    pub fn is_disconnecting(&self) -> bool {
        self.teardown_depth.get() > 0
    }

    /// Unterdrückt die angegebenen Seiteneffekte bis zum Drop des Scopes.
    pub fn suppress(self: &Rc<Self>, effects: &[SideEffect]) -> SuppressionScope {
        for effect in effects {
            self.bump(*effect, 1);
        }
        SuppressionScope {
            guard: Rc::clone(self),
            effects: effects.to_vec(),
            teardown: false,
        }
    }

    /// Betritt den "Disconnecting"-Zustand: Highlights sind unterdrückt,
    /// Selektionsänderungen und Events laufen weiter.
    pub fn enter_teardown(self: &Rc<Self>) -> SuppressionScope {
        let mut scope = self.suppress(&[SideEffect::Highlight]);
        self.teardown_depth.set(self.teardown_depth.get() + 1);
        scope.teardown = true;
        scope
    }

    fn bump(&self, effect: SideEffect, delta: isize) {
        let cell = &self.suppressed[effect.slot()];
        cell.set(cell.get().saturating_add_signed(delta));
    }
}

/// Aktive Unterdrückung; Drop hebt sie auf.
#[must_use = "Die Unterdrückung endet sofort, wenn der Scope gedroppt wird"]
pub struct SuppressionScope {
    guard: Rc<SideEffectGuard>,
    effects: Vec<SideEffect>,
    teardown: bool,
}

impl Drop for SuppressionScope {
    fn drop(&mut self) {
        for effect in &self.effects {
            self.guard.bump(*effect, -1);
        }
        if self.teardown {
            let depth = &self.guard.teardown_depth;
            depth.set(depth.get().saturating_sub(1));
        }
    }
}
