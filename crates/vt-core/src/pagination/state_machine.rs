//! Carousel state machine.
//!
//! Pure transition function `(state, event, slide_count) -> state`. The
//! owner recomputes `slide_count` from the filtered collection after every
//! transition. For `Resized` the count must already reflect the new
//! cards-per-view.

use serde::{Deserialize, Serialize};

use super::window::{next_slide, prev_slide, responsive_cards_per_view, CardsPerView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub current_slide: usize,
    pub cards_per_view: CardsPerView,
}

impl CarouselState {
    pub fn for_viewport(width_px: u32) -> Self {
        Self {
            current_slide: 0,
            cards_per_view: responsive_cards_per_view(width_px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselEvent {
    Next,
    Prev,
    /// Page-indicator jump. Out-of-range indices are ignored.
    SetSlide(usize),
    /// Any criteria edit. The result set may have shrunk.
    FilterChanged,
    /// A fresh collection arrived from the backend.
    SnapshotReplaced,
    /// Host viewport width in px.
    Resized(u32),
}

pub struct CarouselStateMachine;

impl CarouselStateMachine {
    pub fn transition(
        state: CarouselState,
        event: CarouselEvent,
        slide_count: usize,
    ) -> CarouselState {
        match event {
            CarouselEvent::Next => CarouselState {
                current_slide: next_slide(state.current_slide, slide_count),
                ..state
            },
            CarouselEvent::Prev => CarouselState {
                current_slide: prev_slide(state.current_slide, slide_count),
                ..state
            },
            CarouselEvent::SetSlide(index) if index < slide_count => CarouselState {
                current_slide: index,
                ..state
            },
            CarouselEvent::SetSlide(_) => state,
            CarouselEvent::FilterChanged | CarouselEvent::SnapshotReplaced => CarouselState {
                current_slide: 0,
                ..state
            },
            // `slide_count` is the post-resize count.
            CarouselEvent::Resized(width) => CarouselState {
                current_slide: state.current_slide.min(slide_count.saturating_sub(1)),
                cards_per_view: responsive_cards_per_view(width),
            },
        }
    }
}
