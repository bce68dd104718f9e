use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rgb,
};
use thiserror::Error;

use crate::domain::projection::RunwayResult;
use crate::services::formatters::format_date;
use crate::services::runway_report::{
    input_rows, projection_rows, result_rows, PROJECTION_HEADERS, REPORT_FOOTER, REPORT_TITLE,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;
const BODY_SIZE: f32 = 10.0;
const VALUE_COLUMN: f32 = 90.0;
const PROJECTION_COLUMNS: [f32; 5] = [20.0, 45.0, 90.0, 125.0, 160.0];

#[derive(Error, Debug)]
pub enum RunwayPdfError {
    #[error("failed to render pdf: {0}")]
    Render(String),
}

fn primary_color() -> Color {
    Color::Rgb(Rgb::new(36.0 / 255.0, 94.0 / 255.0, 79.0 / 255.0, None))
}

fn text_color() -> Color {
    Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None))
}

/// The standard PDF fonts only cover Latin-1, so the rupee sign is spelled out.
pub fn pdf_text(text: &str) -> String {
    text.replace('₹', "Rs. ").replace('©', "(c)")
}

/// Writes lines top to bottom, starting a new page when the margin is reached.
struct PdfCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PdfCursor {
    fn new() -> Result<Self, RunwayPdfError> {
        let (doc, page, layer) =
            PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RunwayPdfError::Render(format!("{e:?}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RunwayPdfError::Render(format!("{e:?}")))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn text_at(&self, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(pdf_text(text), size, Mm(x), Mm(y), font);
    }

    fn title(&mut self, text: &str) {
        self.layer.set_fill_color(primary_color());
        self.text_at(text, 22.0, MARGIN, self.y, true);
        self.layer.set_fill_color(text_color());
        self.y -= LINE_HEIGHT * 2.0;
    }

    fn line(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT);
        self.text_at(text, BODY_SIZE, MARGIN, self.y, false);
        self.y -= LINE_HEIGHT;
    }

    fn heading(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT * 3.0);
        self.y -= LINE_HEIGHT / 2.0;
        self.layer.set_fill_color(primary_color());
        self.text_at(text, 16.0, MARGIN, self.y, true);
        self.layer.set_fill_color(text_color());
        self.y -= LINE_HEIGHT * 1.5;
    }

    fn row(&mut self, cells: &[(f32, &str)], bold: bool) {
        self.ensure_space(LINE_HEIGHT);
        for (x, cell) in cells {
            self.text_at(cell, BODY_SIZE, *x, self.y, bold);
        }
        self.y -= LINE_HEIGHT;
    }

    fn key_value_table(&mut self, headers: [&str; 2], rows: Vec<(&'static str, String)>) {
        self.row(&[(MARGIN, headers[0]), (VALUE_COLUMN, headers[1])], true);
        for (label, value) in &rows {
            self.row(&[(MARGIN, *label), (VALUE_COLUMN, value.as_str())], false);
        }
    }

    fn footer(&self) {
        self.layer.set_fill_color(primary_color());
        self.text_at(REPORT_FOOTER, BODY_SIZE, MARGIN, MARGIN / 2.0, false);
    }

    fn finish(self) -> Result<(Vec<u8>, usize), RunwayPdfError> {
        let pages = self.pages;
        let bytes = self
            .doc
            .save_to_bytes()
            .map_err(|e| RunwayPdfError::Render(format!("{e:?}")))?;
        Ok((bytes, pages))
    }
}

fn render_pdf(
    result: &RunwayResult,
    generated_on: NaiveDate,
) -> Result<(Vec<u8>, usize), RunwayPdfError> {
    let mut cursor = PdfCursor::new()?;
    cursor.title(REPORT_TITLE);
    cursor.line(&format!("Generated on: {}", format_date(generated_on)));

    cursor.heading("Input Parameters");
    cursor.key_value_table(["Parameter", "Value"], input_rows(result));
    cursor.heading("Runway Analysis Results");
    cursor.key_value_table(["Metric", "Value"], result_rows(result));

    cursor.new_page();
    cursor.title("Monthly Cash Projection");
    let header: Vec<(f32, &str)> = PROJECTION_COLUMNS
        .iter()
        .copied()
        .zip(PROJECTION_HEADERS)
        .collect();
    cursor.row(&header, true);
    for row in projection_rows(result) {
        let cells: Vec<(f32, &str)> = PROJECTION_COLUMNS
            .iter()
            .copied()
            .zip(row.iter().map(String::as_str))
            .collect();
        cursor.row(&cells, false);
    }

    cursor.footer();
    cursor.finish()
}

/// Renders the runway analysis as a PDF: a summary page followed by the
/// monthly projection table, continued over as many pages as needed.
pub fn generate_pdf_report(
    result: &RunwayResult,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, RunwayPdfError> {
    render_pdf(result, generated_on).map(|(bytes, _)| bytes)
}
