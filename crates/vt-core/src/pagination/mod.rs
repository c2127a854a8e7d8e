//! Slide-based pagination over a filtered collection.
//!
//! The window functions are pure; [`CarouselStateMachine`] folds user and
//! host events into the `(current_slide, cards_per_view)` pair.

mod state_machine;
mod window;

pub use state_machine::{CarouselEvent, CarouselState, CarouselStateMachine};
pub use window::{
    next_slide, prev_slide, responsive_cards_per_view, slide_count, window_of, CardsPerView,
    DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH,
};
