//! PDF roadmap report
//!
//! Composes the report for the latest submitted record: title, user fields,
//! embedded chart image (when the file exists), the per-skill gap table, the
//! role's roadmap text, and a footer. The output path is overwritten on
//! every generation.
//!
//! Table rows grow to fit wrapped skill and suggestion text; long sections
//! spill onto additional pages.

use crate::catalog::{roadmap_for, TargetLevels, DEFAULT_TARGET};
use crate::core::error::{Result, SkillGapError};
use crate::core::types::UserRecord;
use crate::report::suggestion::{gap, suggestion_for};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 10.0;

/// Column widths in mm: skill, self, target, gap, suggestion
const COLS: [f32; 5] = [40.0, 20.0, 20.0, 20.0, 90.0];
/// Height of one wrapped text line inside a table cell
const ROW_LINE: f32 = 10.0;
/// Horizontal cell padding
const CELL_PAD: f32 = 2.0;
/// Width the embedded chart is scaled to
const IMAGE_WIDTH: f32 = 180.0;
/// Rough average glyph width for Helvetica, in mm per point of font size
const GLYPH_MM_PER_PT: f32 = 0.3528 * 0.5;
/// Assumed pixel density of the embedded chart
const IMAGE_DPI: f32 = 300.0;

/// Generate the PDF report, overwriting any previous file
///
/// The chart at `chart_path` is embedded if it exists; otherwise the report
/// is produced without it.
pub fn generate_report(
    record: &UserRecord,
    targets: &TargetLevels,
    chart_path: &Path,
    out_path: &Path,
) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        "Skill Gap Roadmap",
        Mm(PAGE_W),
        Mm(PAGE_H),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(pdf_err)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_H - MARGIN,
    };

    // Title
    writer.y -= 10.0;
    writer.text_centered("SKILL GAP ROADMAP", 16.0, &bold);
    writer.y -= 8.0;

    // User fields
    for (label, value) in [
        ("NAME", record.name.as_str()),
        ("STATUS", record.status.as_str()),
        ("ASPIRING ROLE", record.aspiring_role.as_str()),
    ] {
        writer.y -= 8.0;
        writer
            .layer
            .use_text(format!("{}: {}", label, value), 12.0, Mm(MARGIN), Mm(writer.y), &regular);
    }
    writer.y -= 5.0;

    // Chart image, skipped silently when the file is missing
    if chart_path.exists() {
        embed_chart(&mut writer, chart_path)?;
    }
    writer.y -= 5.0;

    draw_table(&mut writer, record, targets, &regular, &bold);

    // Roadmap block
    writer.ensure_space(18.0);
    writer.y -= 10.0;
    writer
        .layer
        .use_text("Personalized 3-Month Roadmap:", 12.0, Mm(MARGIN), Mm(writer.y), &bold);
    let roadmap_chars = max_chars(PAGE_W - 2.0 * MARGIN, 12.0);
    for line in wrap_text(roadmap_for(&record.aspiring_role), roadmap_chars) {
        writer.ensure_space(8.0);
        writer.y -= 8.0;
        writer
            .layer
            .use_text(line, 12.0, Mm(MARGIN), Mm(writer.y), &regular);
    }

    // Footer
    writer.ensure_space(20.0);
    writer.y -= 15.0;
    writer.text_centered("Generated by Skill Gap Analyzer v1.0", 10.0, &italic);

    let file = File::create(out_path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;
    tracing::info!(path = %out_path.display(), "saved PDF report");
    Ok(())
}

/// Tracks the write position and starts fresh pages when space runs out
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_H - MARGIN;
        }
    }

    fn text_centered(&self, text: &str, size: f32, font: &IndirectFontRef) {
        let x = (PAGE_W - text_width(text, size)) / 2.0;
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    /// Stroke a cell border; `y_top` is the top edge in page coordinates
    fn cell_border(&self, x: f32, y_top: f32, w: f32, h: f32) {
        let line = Line {
            points: vec![
                (Point::new(Mm(x), Mm(y_top)), false),
                (Point::new(Mm(x + w), Mm(y_top)), false),
                (Point::new(Mm(x + w), Mm(y_top - h)), false),
                (Point::new(Mm(x), Mm(y_top - h)), false),
            ],
            is_closed: true,
        };
        self.layer.add_line(line);
    }
}

fn embed_chart(writer: &mut PageWriter<'_>, chart_path: &Path) -> Result<()> {
    let file = File::open(chart_path)?;
    let decoder = PngDecoder::new(std::io::BufReader::new(file)).map_err(pdf_err)?;
    let image = Image::try_from(decoder).map_err(pdf_err)?;

    let natural_w = image.image.width.0 as f32 * 25.4 / IMAGE_DPI;
    let natural_h = image.image.height.0 as f32 * 25.4 / IMAGE_DPI;
    let scale = IMAGE_WIDTH / natural_w;
    let drawn_h = natural_h * scale;

    writer.ensure_space(drawn_h);
    writer.y -= drawn_h;
    image.add_to_layer(
        writer.layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(Mm(writer.y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

fn draw_table(
    writer: &mut PageWriter<'_>,
    record: &UserRecord,
    targets: &TargetLevels,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    // Header row
    writer.ensure_space(ROW_LINE);
    let headers = ["Skill", "Self", "Target", "Gap", "Suggestion"];
    let top = writer.y;
    let mut x = MARGIN;
    for (w, header) in COLS.iter().zip(headers) {
        writer.cell_border(x, top, *w, ROW_LINE);
        let cx = x + (w - text_width(header, 12.0)) / 2.0;
        writer
            .layer
            .use_text(header, 12.0, Mm(cx), Mm(top - 6.5), bold);
        x += w;
    }
    writer.y -= ROW_LINE;

    let skill_chars = max_chars(COLS[0] - 2.0 * CELL_PAD, 12.0);
    let sugg_chars = max_chars(COLS[4] - 2.0 * CELL_PAD, 12.0);

    for (skill, rating) in &record.skills {
        let target = targets
            .target_for(&record.aspiring_role, skill)
            .unwrap_or(DEFAULT_TARGET);
        let row_gap = gap(target, *rating);
        let suggestion = suggestion_for(*rating);

        let skill_lines = wrap_text(skill, skill_chars);
        let sugg_lines = wrap_text(suggestion, sugg_chars);
        let row_h = ROW_LINE * skill_lines.len().max(sugg_lines.len()) as f32;

        writer.ensure_space(row_h);
        let top = writer.y;

        // Borders for all five cells at the shared row height
        let mut x = MARGIN;
        for w in COLS {
            writer.cell_border(x, top, w, row_h);
            x += w;
        }

        // Wrapped skill cell
        for (i, line) in skill_lines.iter().enumerate() {
            writer.layer.use_text(
                line,
                12.0,
                Mm(MARGIN + CELL_PAD),
                Mm(top - 6.5 - ROW_LINE * i as f32),
                regular,
            );
        }

        // Centered numeric cells
        let numbers = [rating.to_string(), target.to_string(), row_gap.to_string()];
        let mut x = MARGIN + COLS[0];
        for (w, value) in COLS[1..4].iter().zip(&numbers) {
            let cx = x + (w - text_width(value, 12.0)) / 2.0;
            writer
                .layer
                .use_text(value, 12.0, Mm(cx), Mm(top - 6.5), regular);
            x += w;
        }

        // Wrapped suggestion cell
        let sugg_x = MARGIN + COLS[0] + COLS[1] + COLS[2] + COLS[3];
        for (i, line) in sugg_lines.iter().enumerate() {
            writer.layer.use_text(
                line,
                12.0,
                Mm(sugg_x + CELL_PAD),
                Mm(top - 6.5 - ROW_LINE * i as f32),
                regular,
            );
        }

        writer.y -= row_h;
    }
}

/// Approximate rendered width of a string, in mm
fn text_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * GLYPH_MM_PER_PT
}

/// How many characters fit into a cell of the given width
fn max_chars(width_mm: f32, size_pt: f32) -> usize {
    ((width_mm / (size_pt * GLYPH_MM_PER_PT)) as usize).max(1)
}

/// Greedy word wrap that preserves explicit newlines
///
/// Words longer than the limit are hard-split so a pathological skill name
/// cannot push text outside its cell.
fn wrap_text(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source in text.lines() {
        if source.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in source.split_whitespace() {
            let mut word = word;
            // hard-split oversized words
            while word.chars().count() > max {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split: String = word.chars().take(max).collect();
                let rest_start = split.len();
                lines.push(split);
                word = &word[rest_start..];
            }
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pdf_err<E: std::fmt::Display>(e: E) -> SkillGapError {
    SkillGapError::Pdf(e.to_string())
}
