use tracing::info;

use crate::{
    error::CycleError,
    fetch::ReportSource,
    geo::{self, Geolocation},
    present::present_error,
    render::{DisplayModel, render},
    view::ViewSurface,
};

/// Where a report cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    AcquiringLocation,
    LocationFailed,
    LocationAcquired,
    Fetching,
    FetchFailed,
    FetchSucceeded,
    Rendered,
}

impl CycleState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CycleState::LocationFailed | CycleState::FetchFailed | CycleState::Rendered
        )
    }

    pub fn can_advance_to(&self, next: CycleState) -> bool {
        use CycleState::*;

        matches!(
            (*self, next),
            (Idle, AcquiringLocation)
                | (AcquiringLocation, LocationFailed)
                | (AcquiringLocation, LocationAcquired)
                | (LocationAcquired, Fetching)
                | (Fetching, FetchFailed)
                | (Fetching, FetchSucceeded)
                | (FetchSucceeded, Rendered)
        )
    }
}

/// One pass from location acquisition to either a rendered report or a
/// message in the error panel.
///
/// A cycle is consumed by [`ReportCycle::run`], and it borrows the view
/// exclusively while it runs, so two cycles never write to one view at once.
#[derive(Debug)]
pub struct ReportCycle<'a> {
    geolocation: Option<&'a dyn Geolocation>,
    source: &'a dyn ReportSource,
    state: CycleState,
}

impl<'a> ReportCycle<'a> {
    pub fn new(geolocation: Option<&'a dyn Geolocation>, source: &'a dyn ReportSource) -> Self {
        Self {
            geolocation,
            source,
            state: CycleState::Idle,
        }
    }

    /// Run the cycle to a terminal state. Failures are written to the error
    /// panel before being returned; nothing is retried.
    pub async fn run<V: ViewSurface + ?Sized>(
        mut self,
        view: &mut V,
    ) -> Result<DisplayModel, CycleError> {
        let outcome = self.drive(view).await;
        debug_assert!(self.state.is_terminal(), "cycle stopped in {:?}", self.state);

        match outcome {
            Ok(model) => Ok(model),
            Err(err) => {
                present_error(view, err.user_message());
                Err(err)
            }
        }
    }

    async fn drive<V: ViewSurface + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<DisplayModel, CycleError> {
        self.advance(CycleState::AcquiringLocation);
        let coords = match geo::acquire(self.geolocation).await {
            Ok(coords) => coords,
            Err(err) => {
                self.advance(CycleState::LocationFailed);
                return Err(err.into());
            }
        };
        self.advance(CycleState::LocationAcquired);

        self.advance(CycleState::Fetching);
        let report = match self.source.fetch(coords).await {
            Ok(report) => report,
            Err(err) => {
                self.advance(CycleState::FetchFailed);
                return Err(err.into());
            }
        };
        self.advance(CycleState::FetchSucceeded);

        let model = render(view, &report);
        self.advance(CycleState::Rendered);

        Ok(model)
    }

    fn advance(&mut self, next: CycleState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "invalid cycle transition {:?} -> {:?}",
            self.state,
            next
        );
        info!(from = ?self.state, to = ?next, "report cycle");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::{
        error::{ErrorKind, FetchError},
        geo::{DeniedPosition, FixedPosition},
        model::{Coordinates, PrecipitationKind, RainReport},
        view::{MemoryView, Slot},
    };

    #[derive(Debug, Default)]
    struct StubSource {
        calls: AtomicUsize,
        fail_with_status: Option<reqwest::StatusCode>,
    }

    #[async_trait]
    impl ReportSource for StubSource {
        async fn fetch(&self, coords: Coordinates) -> Result<RainReport, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.fail_with_status {
                return Err(FetchError::Status(status));
            }
            Ok(RainReport {
                latitude: coords.latitude,
                longitude: coords.longitude,
                current_precipitation: PrecipitationKind::Rain,
                current_probability: Some(0.75),
                current_intensity: Some(0.5),
                chance_of_precipitation_today: Some(1.0),
                type_of_precipitation_today: PrecipitationKind::Rain,
            })
        }
    }

    #[tokio::test]
    async fn successful_cycle_renders_report() {
        let position = FixedPosition(Coordinates::new(13.37, 90.01));
        let source = StubSource::default();
        let mut view = MemoryView::new();

        let model = ReportCycle::new(Some(&position), &source)
            .run(&mut view)
            .await
            .unwrap();

        assert_eq!(model.answer, "Yes");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(view.is_visible(Slot::RainReport));
        assert!(!view.is_visible(Slot::Error));
        assert_eq!(view.text(Slot::Latitude), Some("13.37"));
    }

    #[tokio::test]
    async fn missing_capability_never_fetches() {
        let source = StubSource::default();
        let mut view = MemoryView::new();

        let err = ReportCycle::new(None, &source).run(&mut view).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CapabilityUnavailable);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            view.text(Slot::Error),
            Some("This page will not function without GeoLocation support.")
        );
        assert_eq!(view.write_count(Slot::Error), 1);
        assert!(!view.is_visible(Slot::RainReport));
    }

    #[tokio::test]
    async fn denied_location_shows_share_message() {
        let source = StubSource::default();
        let mut view = MemoryView::new();

        let err = ReportCycle::new(Some(&DeniedPosition), &source)
            .run(&mut view)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AcquisitionFailed);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            view.text(Slot::Error),
            Some("You need to share your location for this page to work.")
        );
    }

    #[tokio::test]
    async fn failed_fetch_shows_error_once() {
        let position = FixedPosition(Coordinates::new(1.0, 2.0));
        let source = StubSource {
            fail_with_status: Some(reqwest::StatusCode::SERVICE_UNAVAILABLE),
            ..Default::default()
        };
        let mut view = MemoryView::new();

        let err = ReportCycle::new(Some(&position), &source)
            .run(&mut view)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(view.write_count(Slot::Error), 1);
        assert_eq!(
            view.text(Slot::Error),
            Some("Could not retrieve a rain report, try again later.")
        );
        assert!(!view.is_visible(Slot::RainReport));
        assert_eq!(view.write_count(Slot::Answer), 0);
    }

    #[test]
    fn transitions_follow_the_cycle() {
        use CycleState::*;

        assert!(Idle.can_advance_to(AcquiringLocation));
        assert!(AcquiringLocation.can_advance_to(LocationFailed));
        assert!(Fetching.can_advance_to(FetchSucceeded));
        assert!(FetchSucceeded.can_advance_to(Rendered));

        assert!(!Idle.can_advance_to(Fetching));
        assert!(!Rendered.can_advance_to(AcquiringLocation));
        assert!(!FetchFailed.can_advance_to(Rendered));
    }

    #[test]
    fn terminal_states() {
        use CycleState::*;

        for state in [LocationFailed, FetchFailed, Rendered] {
            assert!(state.is_terminal());
        }
        for state in [Idle, AcquiringLocation, LocationAcquired, Fetching, FetchSucceeded] {
            assert!(!state.is_terminal());
        }
    }
}
