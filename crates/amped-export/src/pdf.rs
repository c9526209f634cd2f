use amped_core::models::category::{Category, CategoryLayout};
use amped_core::models::color::Rgb;
use amped_core::models::estimate::{EstimateCounts, EstimateInput};
use amped_core::models::record::Record;
use amped_core::models::trade::{Branding, TradeBranding};
use jiff::civil::DateTime;

use crate::canvas::DocumentInfo;
use crate::error::ExportError;
use crate::layout::Flow;
use crate::metrics::{text_width, truncate_to_width, FontFace};
use crate::styles::DocumentStyles;

/// Everything about a report that is not record data.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Wall-clock time printed in the header and written to the info
    /// dictionary. The only input besides the records that affects output.
    pub generated_at: DateTime,
    pub branding: Branding,
}

impl ReportMeta {
    pub fn title(&self) -> String {
        format!("{} Estimate Report", self.branding.trade.branding().name)
    }
}

#[derive(Debug)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Render an estimate into a landscape PDF.
///
/// Layout, top to bottom: a branded header (first page only), one table
/// section per non-empty category in routes/devices/conduit order, and a
/// summary of record counts. Section headings and table rows that would
/// cross the footer strip move to a new page; a table continuing on a new
/// page repeats its column header row.
pub fn generate_pdf(
    input: &EstimateInput,
    meta: &ReportMeta,
    styles: &DocumentStyles,
) -> Result<RenderedReport, ExportError> {
    let trade = meta.branding.trade.branding();
    let mut flow = Flow::new(styles);

    draw_header(&mut flow, meta, &trade)?;

    for category in Category::ALL {
        let records = input.records(category);
        if records.is_empty() {
            continue;
        }
        draw_section(&mut flow, category.layout(), records)?;
    }

    draw_summary(&mut flow, &input.counts(), &trade)?;

    let mut canvas = flow.canvas;
    let page_count = canvas.page_count();
    let footer_left = format!(
        "{} - {}",
        meta.branding.company_name, meta.branding.project_name
    );
    for page in 0..page_count {
        let label = format!("Page {} of {}", page + 1, page_count);
        let label_x =
            styles.page_width - styles.margin - text_width(&label, FontFace::Regular, styles.footer_size);
        canvas.text(
            page,
            &label,
            label_x,
            styles.margin,
            FontFace::Regular,
            styles.footer_size,
            styles.muted_color,
        )?;
        // The branding line stops short of the page label.
        let left_text = truncate_to_width(
            &footer_left,
            FontFace::Regular,
            styles.footer_size,
            label_x - styles.margin - 2.0 * styles.cell_padding,
        );
        canvas.text(
            page,
            &left_text,
            styles.margin,
            styles.margin,
            FontFace::Regular,
            styles.footer_size,
            styles.muted_color,
        )?;
    }

    let info = DocumentInfo {
        title: format!("{} - {}", meta.title(), meta.branding.project_name),
        author: meta.branding.company_name.clone(),
        creation_date: meta.generated_at.strftime("D:%Y%m%d%H%M%S").to_string(),
    };
    let bytes = canvas.finish(&info)?;

    tracing::debug!(pages = page_count, bytes = bytes.len(), "rendered estimate report");
    Ok(RenderedReport { bytes, page_count })
}

fn draw_header(flow: &mut Flow<'_>, meta: &ReportMeta, trade: &TradeBranding) -> Result<(), ExportError> {
    let s = flow.styles;
    let page = flow.page();
    let left = flow.left();
    let top = flow.y();
    let width = s.content_width();
    let text_room = width - 2.0 * s.header_inset;
    let title = truncate_to_width(&meta.title(), FontFace::Bold, s.title_size, text_room);
    let subtitle = truncate_to_width(
        &format!("{} - {}", meta.branding.company_name, meta.branding.project_name),
        FontFace::Regular,
        s.subtitle_size,
        text_room,
    );

    flow.canvas
        .fill_rect(page, left, top - s.header_band_height, width, s.header_band_height, trade.primary)?;
    flow.canvas
        .fill_rect(page, left, top - s.header_band_height - 3.0, width, 3.0, trade.accent)?;
    flow.canvas.text(
        page,
        &title,
        left + s.header_inset,
        top - 26.0,
        FontFace::Bold,
        s.title_size,
        Rgb::WHITE,
    )?;
    flow.canvas.text(
        page,
        &subtitle,
        left + s.header_inset,
        top - 46.0,
        FontFace::Regular,
        s.subtitle_size,
        Rgb::WHITE,
    )?;
    flow.advance(s.header_band_height + 3.0 + 16.0);

    let generated = format!("Generated: {}", meta.generated_at.strftime("%Y-%m-%d %H:%M:%S"));
    flow.canvas.text(
        page,
        &generated,
        left,
        flow.y() - s.body_size,
        FontFace::Regular,
        s.body_size,
        s.muted_color,
    )?;
    flow.advance(s.body_size + 4.0);
    Ok(())
}

fn draw_heading(flow: &mut Flow<'_>, text: &str, color: Rgb) -> Result<(), ExportError> {
    let s = flow.styles;
    let page = flow.page();
    let left = flow.left();

    flow.advance(s.section_gap);
    let baseline = flow.y() - s.heading_size;
    flow.canvas
        .text(page, text, left, baseline, FontFace::Bold, s.heading_size, color)?;
    flow.canvas.line(
        page,
        (left, baseline - 4.0),
        (left + s.content_width(), baseline - 4.0),
        1.0,
        color,
    )?;
    flow.advance(s.heading_size + 8.0);
    Ok(())
}

fn heading_height(styles: &DocumentStyles) -> f32 {
    styles.section_gap + styles.heading_size + 8.0
}

fn draw_section(
    flow: &mut Flow<'_>,
    layout: &CategoryLayout,
    records: &[Record],
) -> Result<(), ExportError> {
    let s = flow.styles;
    // Keep the heading together with the column header and the first row.
    flow.ensure_space(heading_height(s) + 2.0 * s.row_height);
    draw_heading(flow, layout.title, layout.accent)?;
    draw_column_header(flow, layout)?;

    let column_width = s.content_width() / layout.columns.len() as f32;
    for (index, record) in records.iter().enumerate() {
        if flow.ensure_space(s.row_height) {
            draw_column_header(flow, layout)?;
        }

        let page = flow.page();
        let left = flow.left();
        let bottom = flow.y() - s.row_height;
        if index % 2 == 1 {
            flow.canvas
                .fill_rect(page, left, bottom, s.content_width(), s.row_height, s.row_shade)?;
        }
        for (i, column) in layout.columns.iter().enumerate() {
            let value = record.cell_or(column.key, layout.placeholder);
            let value = truncate_to_width(
                &value,
                FontFace::Regular,
                s.body_size,
                column_width - 2.0 * s.cell_padding,
            );
            flow.canvas.text(
                page,
                &value,
                left + i as f32 * column_width + s.cell_padding,
                text_baseline(bottom, s),
                FontFace::Regular,
                s.body_size,
                s.text_color,
            )?;
        }
        flow.canvas.line(
            page,
            (left, bottom),
            (left + s.content_width(), bottom),
            0.5,
            s.grid_color,
        )?;
        flow.advance(s.row_height);
    }
    Ok(())
}

fn draw_column_header(flow: &mut Flow<'_>, layout: &CategoryLayout) -> Result<(), ExportError> {
    let s = flow.styles;
    let page = flow.page();
    let left = flow.left();
    let bottom = flow.y() - s.row_height;
    let column_width = s.content_width() / layout.columns.len() as f32;

    flow.canvas
        .fill_rect(page, left, bottom, s.content_width(), s.row_height, layout.accent)?;
    for (i, column) in layout.columns.iter().enumerate() {
        flow.canvas.text(
            page,
            column.header,
            left + i as f32 * column_width + s.cell_padding,
            text_baseline(bottom, s),
            FontFace::Bold,
            s.body_size,
            Rgb::WHITE,
        )?;
    }
    flow.advance(s.row_height);
    Ok(())
}

fn draw_summary(
    flow: &mut Flow<'_>,
    counts: &EstimateCounts,
    trade: &TradeBranding,
) -> Result<(), ExportError> {
    let s = flow.styles;
    let rows = Category::ALL.len() + 1;
    flow.ensure_space(heading_height(s) + rows as f32 * s.row_height);
    draw_heading(flow, "Summary", trade.secondary)?;

    let lines = Category::ALL
        .iter()
        .map(|c| (format!("{}:", c.layout().summary_label), counts.get(*c), FontFace::Regular))
        .chain(std::iter::once((
            "Total records:".to_string(),
            counts.total(),
            FontFace::Bold,
        )));

    let count_x = flow.left() + s.summary_count_offset;
    for (index, (label, count, face)) in lines.enumerate() {
        let page = flow.page();
        let left = flow.left();
        let bottom = flow.y() - s.row_height;
        if index % 2 == 1 {
            flow.canvas
                .fill_rect(page, left, bottom, s.summary_width, s.row_height, s.row_shade)?;
        }
        if face == FontFace::Bold {
            let top = bottom + s.row_height;
            flow.canvas
                .line(page, (left, top), (left + s.summary_width, top), 1.0, trade.secondary)?;
        }
        let baseline = text_baseline(bottom, s);
        flow.canvas
            .text(page, &label, left + s.cell_padding, baseline, FontFace::Bold, s.body_size, s.text_color)?;
        flow.canvas
            .text(page, &count.to_string(), count_x, baseline, face, s.body_size, s.text_color)?;
        flow.advance(s.row_height);
    }
    Ok(())
}

/// Baseline that vertically centers body text in a row whose bottom edge is
/// `bottom`.
fn text_baseline(bottom: f32, styles: &DocumentStyles) -> f32 {
    bottom + (styles.row_height - styles.body_size) / 2.0 + 1.5
}
