//! Card selection within the gallery grid.
//!
//! Cards are laid out row-major with a column count that depends on the
//! terminal width, so every movement takes the current column count.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the selected card, if any cards are shown.
    pub selected: Option<usize>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the first card of a fresh page, or nothing if it is empty.
    pub fn reset(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    pub fn move_left(&mut self, len: usize) {
        if let Some(index) = self.selected.filter(|_| len > 0) {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if let Some(index) = self.selected.filter(|_| len > 0) {
            self.selected = Some((index + 1).min(len - 1));
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if let Some(index) = self.selected
            && index >= columns.max(1)
        {
            self.selected = Some(index - columns.max(1));
        }
    }

    pub fn move_down(&mut self, len: usize, columns: usize) {
        let columns = columns.max(1);
        if let Some(index) = self.selected
            && index + columns < len
        {
            self.selected = Some(index + columns);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(index: usize) -> NavigationState {
        NavigationState {
            selected: Some(index),
        }
    }

    #[test]
    fn test_reset() {
        let mut nav = at(5);
        nav.reset(0);
        assert_eq!(nav.selected, None);
        nav.reset(3);
        assert_eq!(nav.selected, Some(0));
    }

    #[rstest]
    #[case::left_at_start(0, "left", 0)]
    #[case::left(3, "left", 2)]
    #[case::right(3, "right", 4)]
    #[case::right_at_end(9, "right", 9)]
    #[case::up_first_row(2, "up", 2)]
    #[case::up(6, "up", 2)]
    #[case::down(2, "down", 6)]
    #[case::down_past_end(7, "down", 7)]
    fn test_grid_movement(#[case] start: usize, #[case] direction: &str, #[case] expected: usize) {
        // 10 cards in 4 columns: rows [0..4), [4..8), [8..10)
        let (len, columns) = (10, 4);
        let mut nav = at(start);
        match direction {
            "left" => nav.move_left(len),
            "right" => nav.move_right(len),
            "up" => nav.move_up(columns),
            "down" => nav.move_down(len, columns),
            _ => unreachable!(),
        }
        assert_eq!(nav.selected, Some(expected));
    }

    #[test]
    fn test_movement_without_selection_is_noop() {
        let mut nav = NavigationState::new();
        nav.move_right(5);
        nav.move_down(5, 2);
        assert_eq!(nav.selected, None);
    }
}
