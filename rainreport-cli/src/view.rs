use std::io::{self, Write};

use anyhow::Result;
use rainreport_core::{MemoryView, Slot, ViewSurface};
use serde_json::{Map, Value};

const FIELD_LABELS: [(Slot, &str); 5] = [
    (Slot::CurrentPrecipitation, "Right now"),
    (Slot::CurrentProbability, "Probability"),
    (Slot::CurrentIntensity, "Intensity"),
    (Slot::ChanceOfPrecipitationToday, "Chance today"),
    (Slot::TypeOfPrecipitationToday, "Expected today"),
];

/// View surface for a terminal: slots are collected while the cycle runs and
/// printed once it has finished. Hidden panels are never printed.
#[derive(Debug, Default)]
pub struct TerminalView {
    slots: MemoryView,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn text(&self, slot: Slot) -> &str {
        self.slots.text(slot).unwrap_or_default()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.slots
            .is_visible(Slot::Error)
            .then(|| self.text(Slot::Error))
    }

    /// Human-readable report panel, or nothing if it was never revealed.
    pub fn report_lines(&self) -> Vec<String> {
        if !self.slots.is_visible(Slot::RainReport) {
            return Vec::new();
        }

        let mut lines = vec![
            format!("Is it raining? {}", self.text(Slot::Answer)),
            format!(
                "  {:<15} {}, {}",
                "Location:",
                self.text(Slot::Latitude),
                self.text(Slot::Longitude)
            ),
        ];
        lines.extend(
            FIELD_LABELS
                .iter()
                .map(|(slot, label)| format!("  {:<15} {}", format!("{label}:"), self.text(*slot))),
        );
        lines
    }

    /// Visible panels as a JSON object keyed by panel id.
    pub fn to_json(&self) -> Value {
        let mut panels = Map::new();

        if self.slots.is_visible(Slot::RainReport) {
            let fields: Map<String, Value> = Slot::report_fields()
                .iter()
                .map(|slot| (slot.id().to_string(), Value::from(self.text(*slot))))
                .collect();
            panels.insert(Slot::RainReport.id().to_string(), Value::Object(fields));
        }
        if let Some(message) = self.error_message() {
            panels.insert(Slot::Error.id().to_string(), Value::from(message));
        }

        Value::Object(panels)
    }

    /// Report goes to stdout, the error panel to stderr.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &self.to_json())?;
            writeln!(stdout)?;
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        for line in self.report_lines() {
            writeln!(stdout, "{line}")?;
        }
        if let Some(message) = self.error_message() {
            writeln!(io::stderr(), "{message}")?;
        }

        Ok(())
    }
}

impl ViewSurface for TerminalView {
    fn set_visible(&mut self, slot: Slot) {
        self.slots.set_visible(slot);
    }

    fn set_text(&mut self, slot: Slot, value: &str) {
        self.slots.set_text(slot, value);
    }
}
