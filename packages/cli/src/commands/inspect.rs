use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use livepdf_layout::reflow;
use livepdf_parser::{
    load_document, walk_page, walk_paragraph, EditableGlyph, GlyphDumpSource, ImageRef, LivePage, LiveParagraph, ParsedDocument,
    Visitor,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Glyph dump (.json) to inspect
    pub input: PathBuf,

    /// Also print the wrapped lines of every paragraph
    #[arg(short, long)]
    pub lines: bool,
}

pub fn inspect(args: InspectArgs, config: &Config) -> Result<()> {
    let document = load_document(&GlyphDumpSource::new(), &args.input, &config.editor.segmentation)
        .map_err(|e| anyhow!("Cannot load {}: {}", args.input.display(), e))?;

    println!("🔍 {} {}", "Inspecting".green().bold(), args.input.display());
    println!();

    for (page_index, page) in document.pages.iter().enumerate() {
        print_page(page_index, page, args.lines, config);
    }

    let stats = DocumentStats::collect(&document);
    println!("✨ {} {}", "Summary".green().bold(), file_name(&args.input));
    println!("   Pages:      {}", stats.pages);
    println!("   Paragraphs: {}", stats.paragraphs);
    println!("   Glyphs:     {}", stats.glyphs);
    println!("   Images:     {}", stats.images);
    println!("   Fonts:      {}", stats.fonts.iter().cloned().collect::<Vec<_>>().join(", "));
    println!("   Metrics:    {} boxes", document.metrics.len());

    Ok(())
}

fn print_page(page_index: usize, page: &LivePage, show_lines: bool, config: &Config) {
    println!(
        "{} {} (#{}, {} × {})",
        "Page".bright_blue().bold(),
        page_index,
        page.page_number,
        page.width,
        page.height
    );

    if page.paragraphs.is_empty() {
        println!("   {}", "no text".yellow());
    }

    for (index, paragraph) in page.paragraphs.iter().enumerate() {
        let bounds = paragraph.bounding_box;
        println!(
            "   [{}] {:<9} {:>4} glyphs  ({:.1}, {:.1}) – ({:.1}, {:.1})",
            index,
            paragraph.alignment.to_string(),
            paragraph.len(),
            bounds.left,
            bounds.bottom,
            bounds.right,
            bounds.top
        );
        println!("       {}", preview(&paragraph.text(), config.preview_width).dimmed());

        if show_lines {
            for line in reflow(paragraph, &config.editor.layout) {
                println!("       │ {:>7.1} │ {}", line.baseline_y, line.text());
            }
        }
    }

    for image in &page.images {
        println!("   {} {}", "image".cyan(), image.name);
    }
    println!();
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Counts gathered in one walk over the document
#[derive(Debug, Default, PartialEq)]
pub struct DocumentStats {
    pub pages: usize,
    pub paragraphs: usize,
    pub glyphs: usize,
    pub images: usize,
    pub fonts: BTreeSet<String>,
}

impl DocumentStats {
    pub fn collect(document: &ParsedDocument) -> Self {
        let mut stats = Self::default();
        stats.visit_document(document);
        stats
    }
}

impl Visitor for DocumentStats {
    fn visit_page(&mut self, page: &LivePage) {
        self.pages += 1;
        walk_page(self, page);
    }

    fn visit_paragraph(&mut self, paragraph: &LiveParagraph) {
        self.paragraphs += 1;
        walk_paragraph(self, paragraph);
    }

    fn visit_glyph(&mut self, glyph: &EditableGlyph) {
        self.glyphs += 1;
        if !self.fonts.contains(&glyph.font_name) {
            self.fonts.insert(glyph.font_name.clone());
        }
    }

    fn visit_image(&mut self, _image: &ImageRef) {
        self.images += 1;
    }
}
