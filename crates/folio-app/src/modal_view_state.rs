//! Modal body scroll position and viewport bounds.
//!
//! The handler layer moves the offset; the TUI layer reports the content
//! and viewport heights each time it draws the modal.

/// Scroll state for the open section's body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of wrapped lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ModalViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Back to the top with unknown bounds; used when a different section opens
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> ModalViewState {
        let mut state = ModalViewState::new();
        state.update_content_size(total, visible);
        state
    }

    #[test]
    fn test_scroll_down_clamps_to_bottom() {
        let mut state = sized(30, 10);
        state.scroll_down(100);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut state = sized(30, 10);
        state.scroll_down(3);
        state.scroll_up(10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut state = sized(5, 10);
        state.scroll_down(1);
        state.page_down();
        state.scroll_to_bottom();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_moves_by_viewport_minus_overlap() {
        let mut state = sized(100, 12);
        state.page_down();
        assert_eq!(state.offset, 10);
        state.page_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut state = sized(50, 10);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 40);

        state.update_content_size(20, 10);
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_reset() {
        let mut state = sized(50, 10);
        state.scroll_down(7);
        state.reset();
        assert_eq!(state, ModalViewState::default());
    }
}
