use amped_core::models::color::Rgb;
use serde::Serialize;

/// Page geometry and typography for estimate reports. All lengths in points.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentStyles {
    /// Page width (landscape US Letter by default).
    pub page_width: f32,

    /// Page height.
    pub page_height: f32,

    /// Margin applied uniformly on all four sides.
    pub margin: f32,

    /// Height of the colored title band on the first page.
    pub header_band_height: f32,

    pub title_size: f32,
    pub subtitle_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub footer_size: f32,

    /// Height of one table row, header row included.
    pub row_height: f32,

    /// Horizontal padding inside a table cell.
    pub cell_padding: f32,

    /// Vertical space before each section heading.
    pub section_gap: f32,

    /// Horizontal inset of the title and subtitle inside the header band.
    pub header_inset: f32,

    /// Width of the shaded summary table.
    pub summary_width: f32,

    /// Offset of the count column from the left edge of the summary table.
    pub summary_count_offset: f32,

    pub text_color: Rgb,
    pub muted_color: Rgb,
    pub row_shade: Rgb,
    pub grid_color: Rgb,
}

impl DocumentStyles {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest baseline content may use; the strip below is kept for the footer.
    pub fn content_bottom(&self) -> f32 {
        self.margin + self.footer_size + 10.0
    }

    pub fn content_top(&self) -> f32 {
        self.page_height - self.margin
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width: 792.0,
            page_height: 612.0,
            margin: 36.0,
            header_band_height: 58.0,
            title_size: 20.0,
            subtitle_size: 11.0,
            heading_size: 14.0,
            body_size: 10.0,
            footer_size: 8.0,
            row_height: 18.0,
            cell_padding: 6.0,
            section_gap: 18.0,
            header_inset: 14.0,
            summary_width: 300.0,
            summary_count_offset: 220.0,
            text_color: Rgb::hex(0x212121),
            muted_color: Rgb::hex(0x666666),
            row_shade: Rgb::hex(0xF2F4F7),
            grid_color: Rgb::hex(0xCCCCCC),
        }
    }
}
