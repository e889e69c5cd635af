//! Typisierter Publish/Subscribe-Bus.
//!
//! Der Bus hält keinen Selektionszustand; er stellt Events in
//! Registrierungsreihenfolge an alle passenden Listener zu. Listener dürfen
//! während der Zustellung publizieren, abonnieren und kündigen.

use super::events::BusEvent;
use std::any::TypeId;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Callback = Box<dyn Fn(&dyn BusEvent)>;

struct Listener {
    id: u64,
    /// `None` = Monitor, empfängt alle Event-Typen
    event_type: Option<TypeId>,
    active: Cell<bool>,
    callback: Callback,
}

#[derive(Default)]
struct BusInner {
    listeners: RefCell<Vec<Rc<Listener>>>,
    next_id: Cell<u64>,
    /// Events, die während einer laufenden Zustellung publiziert wurden
    pending: RefCell<VecDeque<(TypeId, Box<dyn BusEvent>)>>,
    dispatching: Cell<bool>,
}

impl BusInner {
    fn unsubscribe(&self, id: u64) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners.iter().position(|l| l.id == id) {
            let listener = listeners.remove(pos);
            // Laufende Zustellung hält evtl. noch eine Kopie
            listener.active.set(false);
        }
    }
}

/// Geteilter Event-Bus; Klone verweisen auf denselben Bus.
#[derive(Clone, Default)]
pub struct BroadcastBus {
    inner: Rc<BusInner>,
}

impl BroadcastBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abonniert einen Event-Typ.
    ///
    /// Die Zustellung endet, sobald die zurückgegebene [`Subscription`]
    /// gedroppt wird.
    pub fn subscribe<E: BusEvent>(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        self.register(
            Some(TypeId::of::<E>()),
            Box::new(move |event: &dyn BusEvent| {
                if let Some(event) = event.as_any().downcast_ref::<E>() {
                    callback(event);
                }
            }),
        )
    }

    /// Abonniert alle Event-Typen (z.B. für Tracing oder Recorder).
    pub fn subscribe_all(&self, callback: impl Fn(&dyn BusEvent) + 'static) -> Subscription {
        self.register(None, Box::new(callback))
    }

    fn register(&self, event_type: Option<TypeId>, callback: Callback) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push(Rc::new(Listener {
            id,
            event_type,
            active: Cell::new(true),
            callback,
        }));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Stellt ein Event synchron an alle passenden Listener zu.
    ///
    /// Listener, die während der Zustellung hinzukommen, erhalten erst das
    /// nächste Event; gekündigte Listener erhalten keines mehr.
    ///
    /// Publiziert ein Listener selbst (z.B. durch eine re-entrante
    /// Selektionsänderung), wird das neue Event eingereiht und erst zugestellt,
    /// wenn das laufende Event alle Listener erreicht hat. Jeder Listener sieht
    /// Events damit in Publikationsreihenfolge.
    pub fn publish<E: BusEvent>(&self, event: E) {
        self.inner
            .pending
            .borrow_mut()
            .push_back((TypeId::of::<E>(), Box::new(event) as Box<dyn BusEvent>));

        if self.inner.dispatching.replace(true) {
            return;
        }
        let _dispatch = DispatchScope(&self.inner);

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some((event_type, event)) = next else {
                break;
            };
            self.deliver(event_type, &*event);
        }
    }

    fn deliver(&self, event_type: TypeId, event: &dyn BusEvent) {
        let recipients: Vec<Rc<Listener>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.event_type.is_none_or(|t| t == event_type))
            .cloned()
            .collect();

        log::trace!(
            "Bus: {:?} an {} Listener",
            event.kind(),
            recipients.len()
        );

        for listener in recipients {
            if listener.active.get() {
                (listener.callback)(event);
            }
        }
    }

    /// Anzahl registrierter Listener (alle Typen).
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Setzt den Zustell-Zustand auch nach einem Listener-Panic zurück.
struct DispatchScope<'a>(&'a BusInner);

impl Drop for DispatchScope<'_> {
    fn drop(&mut self) {
        self.0.dispatching.set(false);
        self.0.pending.borrow_mut().clear();
    }
}

/// RAII-Token eines Abonnements; Drop kündigt.
#[must_use = "Das Abonnement endet sofort, wenn das Token gedroppt wird"]
pub struct Subscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Kündigt explizit (gleichbedeutend mit Drop).
    pub fn cancel(self) {}

    /// Löst das Token vom Listener: er bleibt für die Lebensdauer des Busses aktiv.
    pub fn detach(mut self) {
        self.bus = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::{EventKind, SelectionStackChanged, TemporarySelectionChanged};

    fn stack_event(pushed: bool) -> SelectionStackChanged {
        SelectionStackChanged { pushed, depth: 1 }
    }

    #[test]
    fn test_delivers_in_registration_order() {
        let bus = BroadcastBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let log = log.clone();
            bus.subscribe(move |_: &SelectionStackChanged| log.borrow_mut().push("erster"))
        };
        let second = {
            let log = log.clone();
            bus.subscribe(move |_: &SelectionStackChanged| log.borrow_mut().push("zweiter"))
        };

        bus.publish(stack_event(true));

        assert_eq!(*log.borrow(), vec!["erster", "zweiter"]);
        drop((first, second));
    }

    #[test]
    fn test_typed_subscription_ignores_other_types() {
        let bus = BroadcastBus::new();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            bus.subscribe(move |_: &TemporarySelectionChanged| hits.set(hits.get() + 1))
        };

        bus.publish(stack_event(true));

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_monitor_receives_every_kind() {
        let bus = BroadcastBus::new();
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let _monitor = {
            let kinds = kinds.clone();
            bus.subscribe_all(move |event| kinds.borrow_mut().push(event.kind()))
        };

        bus.publish(stack_event(true));
        bus.publish(TemporarySelectionChanged {
            new: None,
            old: None,
            current: Vec::new(),
        });

        assert_eq!(
            *kinds.borrow(),
            vec![
                EventKind::SelectionStackChanged,
                EventKind::TemporarySelectionChanged
            ]
        );
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = BroadcastBus::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            bus.subscribe(move |_: &SelectionStackChanged| hits.set(hits.get() + 1))
        };

        bus.publish(stack_event(true));
        drop(sub);
        bus.publish(stack_event(false));

        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_detached_subscription_stays_active() {
        let bus = BroadcastBus::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            bus.subscribe(move |_: &SelectionStackChanged| hits.set(hits.get() + 1))
                .detach();
        }

        bus.publish(stack_event(true));

        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_listener_cancelled_during_dispatch_is_skipped() {
        let bus = BroadcastBus::new();
        let hits = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim = victim.clone();
            bus.subscribe(move |_: &SelectionStackChanged| {
                victim.borrow_mut().take();
            })
        };
        let sub = {
            let hits = hits.clone();
            bus.subscribe(move |_: &SelectionStackChanged| hits.set(hits.get() + 1))
        };
        *victim.borrow_mut() = Some(sub);

        bus.publish(stack_event(true));

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_nested_publish_is_delivered_after_current_event() {
        let bus = BroadcastBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _relay = {
            let bus_clone = bus.clone();
            bus.subscribe(move |event: &SelectionStackChanged| {
                if event.pushed {
                    bus_clone.publish(stack_event(false));
                }
            })
        };
        let _recorder = {
            let seen = seen.clone();
            bus.subscribe(move |event: &SelectionStackChanged| seen.borrow_mut().push(event.pushed))
        };

        bus.publish(stack_event(true));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_bus_recovers_after_dispatch() {
        let bus = BroadcastBus::new();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            bus.subscribe(move |_: &SelectionStackChanged| hits.set(hits.get() + 1))
        };

        bus.publish(stack_event(true));
        bus.publish(stack_event(false));

        assert_eq!(hits.get(), 2);
        assert!(!bus.inner.dispatching.get());
    }
}
