//! Windowed list: a selection cursor plus the slice of rows currently on screen.
//!
//! Nothing here fails. Out-of-range input is clamped, never rejected; the
//! methods that may have to repair state report it with a `bool` so the
//! renderer can schedule one more pass.

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowState {
    /// `None` only while the collection is empty.
    selected: Option<usize>,
    start: usize,
    capacity: usize,
    total: usize,
}

impl WindowState {
    pub fn new(total: usize, capacity: usize) -> Self {
        let mut window = Self {
            capacity,
            ..Default::default()
        };
        window.reset(total);
        window
    }

    /// Fresh cursor for a replaced collection.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.start = 0;
        self.selected = (total > 0).then_some(0);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn move_next(&mut self) {
        self.shift(1);
    }

    pub fn move_prev(&mut self) {
        self.shift(-1);
    }

    pub fn page_next(&mut self) {
        self.shift(self.capacity.saturating_sub(1) as isize);
    }

    pub fn page_prev(&mut self) {
        self.shift(-(self.capacity as isize));
    }

    fn shift(&mut self, delta: isize) {
        let Some(selected) = self.selected else {
            return;
        };
        let moved = selected.saturating_add_signed(delta);
        self.select(moved);
    }

    /// Puts the cursor on `index` (clamped). The window follows on the next
    /// `recompute`.
    pub fn select(&mut self, index: usize) {
        if self.total == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(index.min(self.total - 1));
    }

    /// Adopts a new item count without recentring. Returns true when the
    /// cursor had to be pulled back inside the collection.
    pub fn set_total(&mut self, total: usize) -> bool {
        self.total = total;
        self.clamp_selection()
    }

    fn clamp_selection(&mut self) -> bool {
        match (self.selected, self.total) {
            (_, 0) => {
                self.selected = None;
                false
            }
            (None, _) => {
                self.selected = Some(0);
                false
            }
            (Some(selected), total) if selected >= total => {
                self.selected = Some(total - 1);
                true
            }
            _ => false,
        }
    }

    /// Per-render recentring. Forward motion scrolls once the cursor passes
    /// the middle of the window; backward motion snaps the window top to the
    /// cursor. Returns true when the cursor itself had to be clamped.
    pub fn recompute(&mut self, total: usize, capacity: usize) -> bool {
        self.capacity = capacity;
        let corrected = self.set_total(total);

        let Some(selected) = self.selected else {
            self.start = 0;
            return corrected;
        };

        let half = capacity.div_ceil(2);
        if selected + half > self.start + capacity {
            self.start = (selected + half + 1).saturating_sub(capacity);
        }
        if selected < self.start {
            self.start = selected;
        }
        self.start = self.start.min(total.saturating_sub(capacity));

        corrected
    }

    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.start + self.capacity).min(self.total);
        self.start.min(end)..end
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(w: &WindowState) {
        match w.selected() {
            None => assert_eq!(w.total(), 0),
            Some(sel) => {
                assert!(sel < w.total(), "selected {} total {}", sel, w.total());
                if w.capacity() > 0 {
                    assert!(w.start() <= sel);
                    assert!(sel < w.start() + w.capacity());
                }
            }
        }
    }

    #[test]
    fn test_forward_scroll_recentres_past_the_middle() {
        let mut w = WindowState::new(100, 10);
        for _ in 0..7 {
            w.move_next();
        }
        assert_eq!(w.selected(), Some(7));
        assert_eq!(w.start(), 0);

        w.move_next();
        w.move_next();
        assert_eq!(w.selected(), Some(9));
        w.recompute(100, 10);
        assert_eq!(w.start(), 5);
        assert_eq!(w.visible_range(), 5..15);
    }

    #[test]
    fn test_backward_scroll_snaps_to_cursor() {
        let mut w = WindowState::new(100, 10);
        w.select(50);
        w.recompute(100, 10);
        assert_eq!(w.start(), 46);

        w.select(40);
        w.recompute(100, 10);
        assert_eq!(w.start(), 40);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        for capacity in 1..12 {
            for sel in 0..40 {
                let mut w = WindowState::new(40, capacity);
                w.select(sel);
                w.recompute(40, capacity);
                let first = w.clone();
                w.recompute(40, capacity);
                assert_eq!(w, first, "capacity {} sel {}", capacity, sel);
                assert_invariant(&w);
            }
        }
    }

    #[test]
    fn test_odd_capacity_rounds_half_up() {
        // half = ceil(5 / 2) = 3, so scrolling starts once sel > start + 2.
        let mut w = WindowState::new(50, 5);
        w.select(2);
        w.recompute(50, 5);
        assert_eq!(w.start(), 0);

        w.select(3);
        w.recompute(50, 5);
        assert_eq!(w.start(), 2);
    }

    #[test]
    fn test_window_start_clamped_at_the_end() {
        let mut w = WindowState::new(12, 10);
        w.select(11);
        w.recompute(12, 10);
        assert_eq!(w.start(), 2);
        assert_eq!(w.visible_range(), 2..12);
    }

    #[test]
    fn test_paging_distances() {
        let mut w = WindowState::new(100, 10);
        w.page_next();
        assert_eq!(w.selected(), Some(9));
        w.page_next();
        assert_eq!(w.selected(), Some(18));
        w.page_prev();
        assert_eq!(w.selected(), Some(8));
        w.page_prev();
        assert_eq!(w.selected(), Some(0));

        w.select(95);
        w.page_next();
        assert_eq!(w.selected(), Some(99));
    }

    #[test]
    fn test_empty_collection_has_no_cursor() {
        let mut w = WindowState::new(0, 10);
        assert_eq!(w.selected(), None);
        w.move_next();
        w.move_prev();
        w.page_next();
        w.page_prev();
        assert_eq!(w.selected(), None);
        assert!(!w.recompute(0, 10));
        assert_eq!(w.visible_range(), 0..0);
    }

    #[test]
    fn test_shrink_clamps_and_reports() {
        let mut w = WindowState::new(30, 10);
        w.select(25);
        w.recompute(30, 10);
        assert!(w.recompute(5, 10));
        assert_eq!(w.selected(), Some(4));
        assert_eq!(w.start(), 0);
        assert!(!w.recompute(5, 10));
    }

    #[test]
    fn test_zero_capacity_draws_nothing() {
        let mut w = WindowState::new(10, 0);
        w.move_next();
        w.page_next();
        w.recompute(10, 0);
        assert_eq!(w.visible_range().len(), 0);
        assert_eq!(w.selected(), Some(1));
    }

    #[test]
    fn test_bounds_hold_for_any_move_sequence() {
        let mut seed: u64 = 0x5eed;
        for total in [1usize, 2, 7, 33, 250] {
            for capacity in [1usize, 2, 5, 10, 24] {
                let mut w = WindowState::new(total, capacity);
                for _ in 0..400 {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    match (seed >> 33) % 5 {
                        0 => w.move_next(),
                        1 => w.move_prev(),
                        2 => w.page_next(),
                        3 => w.page_prev(),
                        _ => {}
                    }
                    w.recompute(total, capacity);
                    assert_invariant(&w);
                }
            }
        }
    }

    /// Window start as the recentring rule defines it, step by step.
    fn reference_start(sel: usize, start: usize, total: usize, cap: usize) -> usize {
        let half = cap.div_ceil(2) as isize;
        let (sel, cap) = (sel as isize, cap as isize);
        let mut start = start as isize;
        if sel > start + cap - half {
            start = sel - cap + half + 1;
        }
        if sel < start {
            start = sel;
        }
        start.clamp(0, (total as isize - cap).max(0)) as usize
    }

    #[test]
    fn test_moves_leave_scrolling_to_recompute() {
        let total = 20;
        for cap in 1..=5 {
            let mut w = WindowState::new(total, cap);
            let mut expected = 0;
            for step in 0..total + 3 {
                w.move_next();
                let sel = w.selected().unwrap();
                expected = reference_start(sel, expected, total, cap);
                w.recompute(total, cap);
                assert_eq!(w.start(), expected, "cap {} step {} forward", cap, step);
            }
            for step in 0..total + 3 {
                w.move_prev();
                let sel = w.selected().unwrap();
                expected = reference_start(sel, expected, total, cap);
                w.recompute(total, cap);
                assert_eq!(w.start(), expected, "cap {} step {} back", cap, step);
            }
        }
    }

    #[test]
    fn test_capacity_two_scrolls_a_full_step() {
        let mut w = WindowState::new(20, 2);
        w.move_next();
        w.recompute(20, 2);
        assert_eq!(w.start(), 0);
        w.move_next();
        assert_eq!(w.start(), 0);
        w.recompute(20, 2);
        assert_eq!(w.start(), 2);
        assert_eq!(w.visible_range(), 2..4);
    }
}
