//! Operationen des Selektions-Managers, nach Bereich aufgeteilt.
//!
//! Jede Datei ergänzt [`crate::SelectionManager`] um einen `impl`-Block;
//! Mutationen laufen alle über den Change-Notifier in `manager.rs`.

mod commands;
mod context;
mod permanent;
mod queries;
mod teardown;
mod temporary;
