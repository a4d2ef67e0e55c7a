use std::collections::{BTreeMap, BTreeSet};

/// Display slots the pipeline writes into.
///
/// `Error` and `RainReport` are panels that start hidden; the rest hold the
/// formatted report fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Error,
    RainReport,
    Latitude,
    Longitude,
    Answer,
    CurrentPrecipitation,
    CurrentProbability,
    CurrentIntensity,
    ChanceOfPrecipitationToday,
    TypeOfPrecipitationToday,
}

impl Slot {
    /// Element identifier of the slot in the page markup.
    pub fn id(&self) -> &'static str {
        match self {
            Slot::Error => "error",
            Slot::RainReport => "rainReport",
            Slot::Latitude => "latitude",
            Slot::Longitude => "longitude",
            Slot::Answer => "answer",
            Slot::CurrentPrecipitation => "currentPrecipitation",
            Slot::CurrentProbability => "currentProbability",
            Slot::CurrentIntensity => "currentIntensity",
            Slot::ChanceOfPrecipitationToday => "chanceOfPrecipitationToday",
            Slot::TypeOfPrecipitationToday => "typeOfPrecipitationToday",
        }
    }

    /// Slots that belong to the report panel, in display order.
    pub const fn report_fields() -> &'static [Slot] {
        &[
            Slot::Latitude,
            Slot::Longitude,
            Slot::Answer,
            Slot::CurrentPrecipitation,
            Slot::CurrentProbability,
            Slot::CurrentIntensity,
            Slot::ChanceOfPrecipitationToday,
            Slot::TypeOfPrecipitationToday,
        ]
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The surface a report cycle writes to. Implementations only store text and
/// visibility; they never add or remove slots.
pub trait ViewSurface {
    fn set_visible(&mut self, slot: Slot);
    fn set_text(&mut self, slot: Slot, value: &str);
}

/// In-memory view surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    text: BTreeMap<Slot, String>,
    visible: BTreeSet<Slot>,
    writes: BTreeMap<Slot, usize>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.text.get(&slot).map(String::as_str)
    }

    pub fn is_visible(&self, slot: Slot) -> bool {
        self.visible.contains(&slot)
    }

    /// Number of times text was written into `slot`.
    pub fn write_count(&self, slot: Slot) -> usize {
        self.writes.get(&slot).copied().unwrap_or(0)
    }
}

impl ViewSurface for MemoryView {
    fn set_visible(&mut self, slot: Slot) {
        self.visible.insert(slot);
    }

    fn set_text(&mut self, slot: Slot, value: &str) {
        self.text.insert(slot, value.to_string());
        *self.writes.entry(slot).or_default() += 1;
    }
}
