use crate::canvas::PdfCanvas;
use crate::styles::DocumentStyles;

/// Top-down flow over a [`PdfCanvas`].
///
/// `y` is the top edge of the next block in PDF user space. Blocks reserve
/// their height with [`Flow::ensure_space`], which breaks to a fresh page
/// when the block would cross the footer strip.
pub struct Flow<'a> {
    pub canvas: PdfCanvas,
    pub styles: &'a DocumentStyles,
    page: usize,
    y: f32,
}

impl<'a> Flow<'a> {
    /// Start a flow on a new first page.
    pub fn new(styles: &'a DocumentStyles) -> Self {
        let mut canvas = PdfCanvas::new(styles.page_width, styles.page_height);
        let page = canvas.add_page();
        Self {
            canvas,
            styles,
            page,
            y: styles.content_top(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn left(&self) -> f32 {
        self.styles.margin
    }

    fn fits(&self, height: f32) -> bool {
        self.y - height >= self.styles.content_bottom()
    }

    /// Make sure `height` points fit below the cursor, starting a new page
    /// if they don't. Returns `true` when a page break happened.
    ///
    /// A block taller than a whole page is still placed on a fresh page and
    /// allowed to run into the footer strip.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.fits(height) || self.at_page_top() {
            return false;
        }
        self.new_page();
        true
    }

    pub fn new_page(&mut self) {
        self.page = self.canvas.add_page();
        self.y = self.styles.content_top();
        tracing::trace!(page = self.page, "page break");
    }

    /// Move the cursor down by `height`.
    pub fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    fn at_page_top(&self) -> bool {
        (self.y - self.styles.content_top()).abs() < f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_starts_on_one_page_at_the_top_margin() {
        let styles = DocumentStyles::default();
        let flow = Flow::new(&styles);
        assert_eq!(flow.canvas.page_count(), 1);
        assert_eq!(flow.y(), styles.page_height - styles.margin);
    }

    #[test]
    fn overflow_breaks_to_a_new_page() {
        let styles = DocumentStyles::default();
        let mut flow = Flow::new(&styles);
        flow.advance(500.0);

        assert!(flow.ensure_space(100.0));
        assert_eq!(flow.page(), 1);
        assert_eq!(flow.y(), styles.content_top());
    }

    #[test]
    fn oversized_block_on_a_fresh_page_does_not_loop() {
        let styles = DocumentStyles::default();
        let mut flow = Flow::new(&styles);
        assert!(!flow.ensure_space(styles.page_height * 2.0));
        assert_eq!(flow.canvas.page_count(), 1);
    }
}
