use serde::{Deserialize, Serialize};

/// Viewports at least this wide show two cards.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Viewports at least this wide show three cards.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Cards shown per slide, always within `1..=3`.
///
/// Only [`responsive_cards_per_view`] produces values; users never set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardsPerView(usize);

impl CardsPerView {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for CardsPerView {
    fn default() -> Self {
        CardsPerView(1)
    }
}

pub fn responsive_cards_per_view(viewport_width_px: u32) -> CardsPerView {
    if viewport_width_px < TABLET_MIN_WIDTH {
        CardsPerView(1)
    } else if viewport_width_px < DESKTOP_MIN_WIDTH {
        CardsPerView(2)
    } else {
        CardsPerView(3)
    }
}

/// `records[slide * n .. (slide + 1) * n]`, clamped to the collection.
///
/// Out-of-range slides yield a short or empty slice rather than an error.
pub fn window_of<T>(records: &[T], current_slide: usize, cards_per_view: usize) -> &[T] {
    let start = current_slide
        .saturating_mul(cards_per_view)
        .min(records.len());
    let end = start.saturating_add(cards_per_view).min(records.len());
    &records[start..end]
}

pub fn slide_count(len: usize, cards_per_view: usize) -> usize {
    if cards_per_view == 0 {
        return 0;
    }
    len.div_ceil(cards_per_view)
}

pub fn next_slide(current_slide: usize, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    (current_slide + 1) % slide_count
}

pub fn prev_slide(current_slide: usize, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    if current_slide == 0 || current_slide >= slide_count {
        slide_count - 1
    } else {
        current_slide - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_records_three_per_view() {
        let records: Vec<u32> = (1..=7).collect();
        let count = slide_count(records.len(), 3);
        assert_eq!(count, 3);

        let sizes: Vec<usize> = (0..count).map(|s| window_of(&records, s, 3).len()).collect();
        assert_eq!(sizes, [3, 3, 1]);
        assert_eq!(window_of(&records, 2, 3), &[7]);
        assert_eq!(next_slide(2, count), 0);
    }

    #[test]
    fn test_windows_cover_every_record_once() {
        for len in 0..12usize {
            let records: Vec<usize> = (0..len).collect();
            for per_view in 1..=3 {
                let count = slide_count(len, per_view);
                let flattened: Vec<usize> = (0..count)
                    .flat_map(|s| window_of(&records, s, per_view).iter().copied())
                    .collect();
                assert_eq!(flattened, records, "len={len} per_view={per_view}");
            }
        }
    }

    #[test]
    fn test_out_of_range_window_is_empty() {
        let records = [1, 2, 3];
        assert!(window_of(&records, 5, 3).is_empty());
        assert!(window_of(&records, usize::MAX, 3).is_empty());
        assert!(window_of::<u8>(&[], 0, 2).is_empty());
    }

    #[test]
    fn test_slide_count_edges() {
        assert_eq!(slide_count(0, 3), 0);
        assert_eq!(slide_count(3, 3), 1);
        assert_eq!(slide_count(4, 3), 2);
        assert_eq!(slide_count(4, 0), 0);
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        for count in 2..6 {
            for slide in 0..count {
                assert_eq!(prev_slide(next_slide(slide, count), count), slide);
                assert_eq!(next_slide(prev_slide(slide, count), count), slide);
            }
        }
    }

    #[test]
    fn test_navigation_without_slides_stays_at_zero() {
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(prev_slide(0, 0), 0);
        assert_eq!(prev_slide(0, 4), 3);
    }

    #[test]
    fn test_prev_from_past_the_end_lands_on_last() {
        assert_eq!(prev_slide(6, 3), 2);
        assert_eq!(prev_slide(3, 3), 2);
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(responsive_cards_per_view(0).get(), 1);
        assert_eq!(responsive_cards_per_view(767).get(), 1);
        assert_eq!(responsive_cards_per_view(768).get(), 2);
        assert_eq!(responsive_cards_per_view(1023).get(), 2);
        assert_eq!(responsive_cards_per_view(1024).get(), 3);
        assert_eq!(responsive_cards_per_view(2560).get(), 3);
    }
}
