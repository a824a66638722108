//! Paginated PDF shopping list rendering.
//!
//! A4 pages, coordinates in points with the origin at the bottom-left.
//! The layout metrics live in [`crate::constants`]. Built-in Helvetica
//! covers Latin text; an external TTF can be supplied through
//! configuration for other grapheme sets.

use std::fs::File;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference};

use crate::constants::{
    PDF_FONT_SIZE_HEADER, PDF_FONT_SIZE_LINE, PDF_INDENT_AFTER_HEADER, PDF_INDENT_LEFT,
    PDF_INDENT_TOP, PDF_LINE_SPACING,
};
use crate::domain::entities::ShoppingList;

use super::{RenderError, capitalize};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PAGE_HEIGHT_PT: f32 = 841.89;

fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / 72.0
}

/// Cursor over the current page, breaking to a new page once the next
/// line would drop below the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_PT - PDF_INDENT_TOP,
        }
    }

    fn write_line(&mut self, text: &str, font_size: f32, font: &IndirectFontRef) {
        if self.y < PDF_INDENT_TOP {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_PT - PDF_INDENT_TOP;
        }

        self.layer.use_text(
            text,
            font_size,
            Mm(pt_to_mm(PDF_INDENT_LEFT)),
            Mm(pt_to_mm(self.y)),
            font,
        );
        self.y -= PDF_LINE_SPACING;
    }

    fn advance(&mut self, points: f32) {
        self.y -= points;
    }
}

/// Renders the list as a PDF document.
///
/// # Errors
///
/// Returns [`RenderError::Font`] when `font_path` cannot be read or
/// embedded, and [`RenderError::Pdf`] when document assembly fails.
pub fn render(list: &ShoppingList, font_path: Option<&Path>) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Shopping list",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );

    let (header_font, line_font) = load_fonts(&doc, font_path)?;

    {
        let mut writer = PageWriter::new(&doc, doc.get_page(first_page).get_layer(first_layer));

        writer.write_line(
            &format!(
                "Shopping list from {}",
                list.generated_at.format("%Y-%m-%d %H:%M")
            ),
            PDF_FONT_SIZE_HEADER,
            &header_font,
        );
        writer.advance(PDF_INDENT_AFTER_HEADER - PDF_LINE_SPACING);

        writer.write_line("Recipes:", PDF_FONT_SIZE_LINE, &header_font);
        for (index, recipe) in list.recipes.iter().enumerate() {
            writer.write_line(
                &format!("{}. {}", index + 1, recipe),
                PDF_FONT_SIZE_LINE,
                &line_font,
            );
        }

        writer.advance(PDF_LINE_SPACING);
        writer.write_line("Ingredients:", PDF_FONT_SIZE_LINE, &header_font);
        for (index, item) in list.items.iter().enumerate() {
            writer.write_line(
                &format!(
                    "{}. {}: {} {}",
                    index + 1,
                    capitalize(&item.name),
                    item.total_amount,
                    item.measurement_unit
                ),
                PDF_FONT_SIZE_LINE,
                &line_font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Loads (header, line) fonts: a single external TTF when configured,
/// otherwise the built-in Helvetica pair.
fn load_fonts(
    doc: &PdfDocumentReference,
    font_path: Option<&Path>,
) -> Result<(IndirectFontRef, IndirectFontRef), RenderError> {
    match font_path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                RenderError::Font(format!("cannot open {}: {}", path.display(), e))
            })?;
            let font = doc
                .add_external_font(file)
                .map_err(|e| RenderError::Font(format!("cannot embed {}: {}", path.display(), e)))?;
            Ok((font.clone(), font))
        }
        None => {
            let header = doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Font(e.to_string()))?;
            let line = doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Font(e.to_string()))?;
            Ok((header, line))
        }
    }
}
