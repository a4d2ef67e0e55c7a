use serde::Serialize;

use crate::{
    format,
    model::RainReport,
    view::{Slot, ViewSurface},
};

/// Display strings derived from one [`RainReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub latitude: String,
    pub longitude: String,
    pub answer: String,
    pub current_precipitation: String,
    pub current_probability: String,
    pub current_intensity: String,
    pub chance_of_precipitation_today: String,
    pub type_of_precipitation_today: String,
}

impl DisplayModel {
    pub fn from_report(report: &RainReport) -> Self {
        Self {
            latitude: format::coordinate(report.latitude),
            longitude: format::coordinate(report.longitude),
            answer: format::answer(&report.current_precipitation).to_string(),
            current_precipitation: format::precipitation_label(&report.current_precipitation)
                .to_string(),
            current_probability: format::percent(report.current_probability),
            current_intensity: format::intensity(report.current_intensity),
            chance_of_precipitation_today: format::percent(report.chance_of_precipitation_today),
            type_of_precipitation_today: format::precipitation_label(
                &report.type_of_precipitation_today,
            )
            .to_string(),
        }
    }

    /// Every report slot paired with its text, in [`Slot::report_fields`] order.
    pub fn slots(&self) -> [(Slot, &str); 8] {
        [
            (Slot::Latitude, self.latitude.as_str()),
            (Slot::Longitude, self.longitude.as_str()),
            (Slot::Answer, self.answer.as_str()),
            (Slot::CurrentPrecipitation, self.current_precipitation.as_str()),
            (Slot::CurrentProbability, self.current_probability.as_str()),
            (Slot::CurrentIntensity, self.current_intensity.as_str()),
            (Slot::ChanceOfPrecipitationToday, self.chance_of_precipitation_today.as_str()),
            (Slot::TypeOfPrecipitationToday, self.type_of_precipitation_today.as_str()),
        ]
    }
}

/// Reveal the report panel and overwrite every report slot.
pub fn render<V: ViewSurface + ?Sized>(view: &mut V, report: &RainReport) -> DisplayModel {
    let model = DisplayModel::from_report(report);

    view.set_visible(Slot::RainReport);
    for (slot, text) in model.slots() {
        view.set_text(slot, text);
    }

    tracing::info!(answer = %model.answer, "rendered rain report");
    model
}
