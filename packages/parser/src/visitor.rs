use crate::model::{EditableGlyph, ImageRef, LivePage, LiveParagraph};
use crate::parser::ParsedDocument;

/// Visitor pattern for traversing a parsed document immutably
///
/// Default implementations walk the entire tree. Override specific
/// visit_* methods to act on the nodes you care about.
pub trait Visitor: Sized {
    fn visit_document(&mut self, doc: &ParsedDocument) {
        walk_document(self, doc);
    }

    fn visit_page(&mut self, page: &LivePage) {
        walk_page(self, page);
    }

    fn visit_paragraph(&mut self, paragraph: &LiveParagraph) {
        walk_paragraph(self, paragraph);
    }

    fn visit_glyph(&mut self, _glyph: &EditableGlyph) {
        // Leaf node, no children to walk
    }

    fn visit_image(&mut self, _image: &ImageRef) {
        // Leaf node, no children to walk
    }
}

pub fn walk_document<V: Visitor>(visitor: &mut V, doc: &ParsedDocument) {
    for page in &doc.pages {
        visitor.visit_page(page);
    }
}

pub fn walk_page<V: Visitor>(visitor: &mut V, page: &LivePage) {
    for paragraph in &page.paragraphs {
        visitor.visit_paragraph(paragraph);
    }
    for image in &page.images {
        visitor.visit_image(image);
    }
}

pub fn walk_paragraph<V: Visitor>(visitor: &mut V, paragraph: &LiveParagraph) {
    for glyph in &paragraph.glyphs {
        visitor.visit_glyph(glyph);
    }
}
