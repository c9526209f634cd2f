use amped_core::models::color::Rgb;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::ExportError;
use crate::metrics::{encode_win_ansi, FontFace};

/// Metadata written to the document information dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    /// PDF date string, e.g. `D:20261019140322`.
    pub creation_date: String,
}

/// An in-memory drawing surface of equally sized pages.
///
/// Drawing calls append content-stream operations to a page; nothing is
/// assembled into a PDF object graph until [`PdfCanvas::finish`], so pages
/// stay editable (e.g. for "Page i of N" footers) until the very end.
/// Coordinates are PDF user space: points, origin at the bottom-left corner.
pub struct PdfCanvas {
    width: f32,
    height: f32,
    pages: Vec<Vec<Operation>>,
}

impl PdfCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
        }
    }

    /// Append a blank page and return its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Vec::new());
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_mut(&mut self, page: usize) -> Result<&mut Vec<Operation>, ExportError> {
        let count = self.pages.len();
        self.pages
            .get_mut(page)
            .ok_or_else(|| ExportError::Layout(format!("page {page} out of range ({count} pages)")))
    }

    /// Set `text` with its baseline starting at (`x`, `y`).
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        page: usize,
        text: &str,
        x: f32,
        y: f32,
        face: FontFace,
        size: f32,
        color: Rgb,
    ) -> Result<(), ExportError> {
        let [r, g, b] = color.unit();
        self.page_mut(page)?.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![face.resource_name().into(), size.into()]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
        Ok(())
    }

    /// Fill the rectangle whose lower-left corner is (`x`, `y`).
    pub fn fill_rect(
        &mut self,
        page: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    ) -> Result<(), ExportError> {
        let [r, g, b] = color.unit();
        self.page_mut(page)?.extend([
            Operation::new("q", vec![]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
            Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ]);
        Ok(())
    }

    pub fn line(
        &mut self,
        page: usize,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    ) -> Result<(), ExportError> {
        let [r, g, b] = color.unit();
        self.page_mut(page)?.extend([
            Operation::new("q", vec![]),
            Operation::new("RG", vec![r.into(), g.into(), b.into()]),
            Operation::new("w", vec![width.into()]),
            Operation::new("m", vec![from.0.into(), from.1.into()]),
            Operation::new("l", vec![to.0.into(), to.1.into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
        Ok(())
    }

    /// Assemble the page tree, fonts and info dictionary and serialize the
    /// document.
    ///
    /// Object numbering depends only on the drawn content, so identical
    /// drawing calls and info produce identical bytes.
    pub fn finish(self, info: &DocumentInfo) -> Result<Vec<u8>, ExportError> {
        if self.pages.is_empty() {
            return Err(ExportError::Layout("document has no pages".to_string()));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations }
                .encode()
                .map_err(|e| ExportError::Encode(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.width),
                    Object::Real(self.height),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = add_info(&mut doc, info);
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}

fn add_info(doc: &mut Document, info: &DocumentInfo) -> ObjectId {
    let literal = |s: &str| Object::String(encode_win_ansi(s), StringFormat::Literal);
    doc.add_object(dictionary! {
        "Title" => literal(&info.title),
        "Author" => literal(&info.author),
        "Creator" => literal("AMPED PDF Generator"),
        "Producer" => literal(concat!("amped-export ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(info.creation_date.as_str()),
        "ModDate" => Object::string_literal(info.creation_date.as_str()),
    })
}
