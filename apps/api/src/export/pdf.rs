//! PDF export — renders plain text onto A4 pages with a built-in font.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 5.5;
/// Helvetica at 11pt averages ~2mm per glyph; 170mm of usable width.
const MAX_CHARS_PER_LINE: usize = 85;

/// Reduces a caller-supplied filename to a bare `*.pdf` name.
///
/// Directory components are dropped so the file always lands in the output
/// directory. Returns `None` when nothing usable remains.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return None;
    }

    if base.to_lowercase().ends_with(".pdf") {
        if base.len() == ".pdf".len() {
            return None;
        }
        Some(base.to_string())
    } else {
        Some(format!("{base}.pdf"))
    }
}

/// Greedy word wrap. Paragraph breaks are kept as empty lines; words longer
/// than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();

            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                let rest = word.split_off(split_at);
                lines.push(word);
                word = rest;
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }

        lines.push(current);
    }

    lines
}

/// Writes `text` to `<output_dir>/<filename>` as a PDF and returns the path.
///
/// Blocking; call from `spawn_blocking` inside async handlers.
pub fn generate_pdf(text: &str, filename: &str, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create PDF output directory {}", output_dir.display()))?;

    let path = output_dir.join(filename);
    let title = filename.trim_end_matches(".pdf");

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("Failed to load built-in Helvetica font: {e:?}"))?;

    let lines = wrap_text(text, MAX_CHARS_PER_LINE);
    let lines_per_page = ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / LINE_HEIGHT_MM) as usize;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut pages = 1;

    for (i, line) in lines.iter().enumerate() {
        let slot = i % lines_per_page;
        if i > 0 && slot == 0 {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            pages += 1;
        }

        if line.is_empty() {
            continue;
        }

        let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * slot as f32;
        layer.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
    }

    let file = File::create(&path)
        .with_context(|| format!("Failed to create PDF file {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow!("Failed to write PDF file {}: {e:?}", path.display()))?;

    info!("Wrote {} ({} pages)", path.display(), pages);
    Ok(path)
}
