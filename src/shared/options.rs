//! Zentrale Konfiguration des Selektions-Subsystems.
//!
//! `SelectionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektions-Stapel ───────────────────────────────────────────────

/// Ab dieser Stapeltiefe wird beim Push gewarnt (vergessene Pops in Dialogen).
pub const STACK_DEPTH_WARNING: usize = 8;

// ── Diagnose ────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Commands im Command-Log.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

/// Alle zur Laufzeit änderbaren Selektions-Optionen.
/// Wird als `mech_model_selection.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Highlight-Aufrufe an den Renderer senden
    #[serde(default = "default_true")]
    pub highlight_enabled: bool,
    /// Nach jeder Selektionsänderung die Command-Sensitivität neu berechnen lassen
    #[serde(default = "default_true")]
    pub refresh_sensitivity: bool,
    /// Warnschwelle für die Stapeltiefe
    #[serde(default = "default_stack_depth_warning")]
    pub stack_depth_warning: usize,
    /// Kapazität des Command-Logs
    #[serde(default = "default_command_log_capacity")]
    pub command_log_capacity: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            highlight_enabled: true,
            refresh_sensitivity: true,
            stack_depth_warning: STACK_DEPTH_WARNING,
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

/// Serde-Default für die Schalter (fehlende Einträge = aktiv).
fn default_true() -> bool {
    true
}

/// Serde-Default für `stack_depth_warning` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_stack_depth_warning() -> usize {
    STACK_DEPTH_WARNING
}

/// Serde-Default für `command_log_capacity`.
fn default_command_log_capacity() -> usize {
    COMMAND_LOG_CAPACITY
}

impl SelectionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Selektions-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Selektions-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mech_model_selection"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mech_model_selection.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "mech_model_selection_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip");
        let options = SelectionOptions {
            highlight_enabled: false,
            refresh_sensitivity: true,
            stack_depth_warning: 3,
            command_log_capacity: 42,
        };

        options
            .save_to_file(&path)
            .expect("Speichern sollte funktionieren");
        let loaded = SelectionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_file("fehlt_sicher");
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            SelectionOptions::load_from_file(&path),
            SelectionOptions::default()
        );
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let path = temp_file("kaputt");
        std::fs::write(&path, "highlight_enabled = \"vielleicht\"").expect("Schreiben");
        let loaded = SelectionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, SelectionOptions::default());
    }

    #[test]
    fn test_missing_optional_fields_use_serde_defaults() {
        let parsed: SelectionOptions =
            toml::from_str("highlight_enabled = true\nrefresh_sensitivity = false\n")
                .expect("TOML sollte parsen");

        assert!(!parsed.refresh_sensitivity);
        assert_eq!(parsed.stack_depth_warning, STACK_DEPTH_WARNING);
        assert_eq!(parsed.command_log_capacity, COMMAND_LOG_CAPACITY);
    }

    #[test]
    fn test_partial_file_keeps_given_values() {
        let path = temp_file("teilweise");
        std::fs::write(&path, "stack_depth_warning = 2\n").expect("Schreiben");
        let loaded = SelectionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.stack_depth_warning, 2);
        assert!(loaded.highlight_enabled);
        assert!(loaded.refresh_sensitivity);
    }

    #[test]
    fn test_config_path_sits_next_to_binary() {
        let path = SelectionOptions::config_path();

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("mech_model_selection.toml")
        );
        if let Ok(exe) = std::env::current_exe() {
            assert_eq!(path.parent(), exe.parent());
        }
    }
}
