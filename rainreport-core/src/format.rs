//! Pure conversions from report fields to display strings.

use crate::model::{PrecipitationKind, known_reading};

const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Answer to "is it raining right now?".
pub fn answer(kind: &PrecipitationKind) -> &'static str {
    match kind {
        PrecipitationKind::Rain => "Yes",
        PrecipitationKind::Sleet | PrecipitationKind::Snow | PrecipitationKind::None => "No",
        PrecipitationKind::Unrecognized(_) => "Unknown",
    }
}

pub fn precipitation_label(kind: &PrecipitationKind) -> &str {
    match kind {
        PrecipitationKind::Rain | PrecipitationKind::Sleet | PrecipitationKind::Snow => {
            kind.as_str()
        }
        PrecipitationKind::None => "no precipitation",
        PrecipitationKind::Unrecognized(_) => "precipitation",
    }
}

/// Format a probability in `[0, 1]` as a whole percentage, e.g. `0.333` -> `"33%"`.
pub fn percent(value: Option<f64>) -> String {
    match value.and_then(known_reading) {
        // f64::round rounds half away from zero.
        Some(v) => format!("{:.0}%", (v * 100.0).round()),
        None => "unknown".to_string(),
    }
}

/// Format an intensity in inches per hour as millimeters per hour.
pub fn intensity(value: Option<f64>) -> String {
    match value.and_then(known_reading) {
        Some(v) => format!("{:.2} mm/hour", hundredths(v * MILLIMETERS_PER_INCH)),
        None => "unknown".to_string(),
    }
}

// `{:.2}` alone rounds exact ties to even; ties here go away from zero.
fn hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortest decimal form of a coordinate, unrounded.
pub fn coordinate(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_yes_only_for_rain() {
        assert_eq!(answer(&PrecipitationKind::Rain), "Yes");
        assert_eq!(answer(&PrecipitationKind::Snow), "No");
        assert_eq!(answer(&PrecipitationKind::Sleet), "No");
        assert_eq!(answer(&PrecipitationKind::None), "No");
        assert_eq!(answer(&PrecipitationKind::from("test")), "Unknown");
        assert_eq!(answer(&PrecipitationKind::from("")), "Unknown");
    }

    #[test]
    fn precipitation_label_passes_known_kinds_through() {
        assert_eq!(precipitation_label(&PrecipitationKind::Rain), "rain");
        assert_eq!(precipitation_label(&PrecipitationKind::Snow), "snow");
        assert_eq!(precipitation_label(&PrecipitationKind::Sleet), "sleet");
        assert_eq!(precipitation_label(&PrecipitationKind::None), "no precipitation");
        assert_eq!(precipitation_label(&PrecipitationKind::from("test")), "precipitation");
        assert_eq!(precipitation_label(&PrecipitationKind::default()), "precipitation");
    }

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(percent(Some(0.333)), "33%");
        assert_eq!(percent(Some(0.75)), "75%");
        assert_eq!(percent(Some(1.0)), "100%");
        assert_eq!(percent(Some(0.0)), "0%");
        assert_eq!(percent(Some(0.125)), "13%");
    }

    #[test]
    fn percent_is_unknown_for_sentinel_and_non_numbers() {
        assert_eq!(percent(None), "unknown");
        assert_eq!(percent(Some(-1.0)), "unknown");
        assert_eq!(percent(Some(f64::NAN)), "unknown");
        assert_eq!(percent(Some(f64::INFINITY)), "unknown");
    }

    #[test]
    fn intensity_converts_to_millimeters() {
        assert_eq!(intensity(Some(0.5)), "12.70 mm/hour");
        assert_eq!(intensity(Some(0.0)), "0.00 mm/hour");
        assert_eq!(intensity(Some(1.0)), "25.40 mm/hour");
    }

    #[test]
    fn intensity_rounds_ties_up() {
        // 0.004921259842519686 in * 25.4 is exactly 0.125 mm.
        assert_eq!(intensity(Some(0.004921259842519686)), "0.13 mm/hour");
        assert_eq!(format!("{:.2}", hundredths(1.125)), "1.13");
        assert_eq!(format!("{:.2}", hundredths(1.005)), "1.00");
    }

    #[test]
    fn intensity_is_unknown_for_sentinel_and_non_numbers() {
        assert_eq!(intensity(None), "unknown");
        assert_eq!(intensity(Some(-1.0)), "unknown");
        assert_eq!(intensity(Some(f64::NAN)), "unknown");
    }

    #[test]
    fn coordinate_is_not_rounded() {
        assert_eq!(coordinate(13.37), "13.37");
        assert_eq!(coordinate(90.01), "90.01");
        assert_eq!(coordinate(59.329323), "59.329323");
        assert_eq!(coordinate(-18.5), "-18.5");
    }
}
