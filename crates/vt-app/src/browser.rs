//! Actions list session.
//!
//! Canonical state is the snapshot, the criteria and the carousel state.
//! Everything the list renders (`filtered`, `visible`, `slide_count`) is
//! derived in [`ActionsBrowser::recompute`], which runs after every mutation.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use vt_core::actions::{apply_filter, FilterOptions};
use vt_core::pagination::{responsive_cards_per_view, slide_count, window_of};
use vt_core::{
    ActionRecord, CarouselEvent, CarouselState, CarouselStateMachine, FilterCriteria, FilterField,
};

use crate::usecases::LoadActions;
use crate::viewport::{ViewportHub, ViewportSubscription};

/// Derived, read-only view of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionsView {
    pub filtered: Vec<ActionRecord>,
    pub visible: Vec<ActionRecord>,
    pub slide_count: usize,
    pub current_slide: usize,
    pub cards_per_view: usize,
    /// Last fetch failure; the snapshot is stale while this is set.
    pub error: Option<String>,
}

pub struct ActionsBrowser {
    snapshot: Arc<[ActionRecord]>,
    criteria: FilterCriteria,
    carousel: CarouselState,
    error: Option<String>,
    viewport: Option<ViewportSubscription>,
    view: ActionsView,
}

impl ActionsBrowser {
    pub fn new(viewport_width_px: u32) -> Self {
        let mut browser = Self {
            snapshot: Arc::from(Vec::new()),
            criteria: FilterCriteria::default(),
            carousel: CarouselState::for_viewport(viewport_width_px),
            error: None,
            viewport: None,
            view: ActionsView::default(),
        };
        browser.recompute();
        browser
    }

    pub fn view(&self) -> &ActionsView {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn snapshot(&self) -> &[ActionRecord] {
        &self.snapshot
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.snapshot)
    }

    pub fn replace_snapshot(&mut self, records: Vec<ActionRecord>) {
        self.snapshot = Arc::from(records);
        self.error = None;
        self.dispatch(CarouselEvent::SnapshotReplaced);
    }

    /// Fetches a new snapshot. On failure the previous snapshot stays and
    /// the error is exposed through the view.
    pub async fn refresh(&mut self, load: &LoadActions) {
        match load.execute().await {
            Ok(records) => self.replace_snapshot(records),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Keeping stale actions snapshot");
                self.error = Some(format!("{e:#}"));
                self.recompute();
            }
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.dispatch(CarouselEvent::FilterChanged);
    }

    pub fn set_filter_field(&mut self, field: FilterField, value: impl Into<String>) {
        let criteria = self.criteria.with_field(field, value);
        self.set_criteria(criteria);
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn next(&mut self) {
        self.dispatch(CarouselEvent::Next);
    }

    pub fn prev(&mut self) {
        self.dispatch(CarouselEvent::Prev);
    }

    pub fn go_to(&mut self, slide: usize) {
        self.dispatch(CarouselEvent::SetSlide(slide));
    }

    pub fn resize(&mut self, viewport_width_px: u32) {
        self.dispatch(CarouselEvent::Resized(viewport_width_px));
    }

    /// Starts listening to `hub`. Replaces any previous subscription.
    pub fn attach_viewport(&mut self, hub: &ViewportHub) {
        let mut subscription = hub.subscribe();
        let width = subscription.current();
        self.viewport = Some(subscription);
        self.resize(width);
    }

    pub fn detach_viewport(&mut self) {
        self.viewport = None;
    }

    /// Applies the latest pending resize, if any. Returns whether one was applied.
    pub fn sync_viewport(&mut self) -> bool {
        let width = self.viewport.as_mut().and_then(|s| s.poll_change());
        match width {
            Some(width) => {
                self.resize(width);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, event: CarouselEvent) {
        let filtered_len = self.view.filtered.len();
        let count = match event {
            // Navigation works on the current result set; resets are
            // count-independent.
            CarouselEvent::Next | CarouselEvent::Prev | CarouselEvent::SetSlide(_) => {
                slide_count(filtered_len, self.carousel.cards_per_view.get())
            }
            CarouselEvent::Resized(width) => {
                slide_count(filtered_len, responsive_cards_per_view(width).get())
            }
            CarouselEvent::FilterChanged | CarouselEvent::SnapshotReplaced => 0,
        };
        self.carousel = CarouselStateMachine::transition(self.carousel, event, count);
        debug!(?event, slide = self.carousel.current_slide, "Carousel transition");
        self.recompute();
    }

    fn recompute(&mut self) {
        let filtered = apply_filter(&self.snapshot, &self.criteria);
        let per_view = self.carousel.cards_per_view.get();
        let visible = window_of(&filtered, self.carousel.current_slide, per_view).to_vec();

        self.view = ActionsView {
            slide_count: slide_count(filtered.len(), per_view),
            current_slide: self.carousel.current_slide,
            cards_per_view: per_view,
            visible,
            filtered,
            error: self.error.clone(),
        };
    }
}
