use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use livepdf_editor::{ClipboardProvider, EditorAction, EditorStore, MemoryClipboard};
use livepdf_parser::GlyphDumpSource;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Glyph dump (.json) to edit
    pub input: PathBuf,

    /// Page index, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Paragraph index on the page, starting at 0
    #[arg(long, default_value_t = 0)]
    pub paragraph: usize,

    /// JSON list of steps to apply to the paragraph
    #[arg(short, long)]
    pub script: PathBuf,
}

/// Clipboard operations a script can interleave with actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardStep {
    Copy,
    Cut,
    Paste,
}

/// One entry of an edit script: `{"clipboard": "cut"}` or any editor action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Clipboard { clipboard: ClipboardStep },
    Action(EditorAction),
}

pub fn edit(args: EditArgs, config: &Config) -> Result<()> {
    let script = std::fs::read_to_string(&args.script)
        .map_err(|e| anyhow!("Cannot read script {}: {}", args.script.display(), e))?;
    let steps: Vec<ScriptStep> =
        serde_json::from_str(&script).map_err(|e| anyhow!("Invalid script {}: {}", args.script.display(), e))?;

    let mut store = EditorStore::open(&GlyphDumpSource::new(), &args.input, config.editor.clone())
        .map_err(|e| anyhow!("Cannot load {}: {}", args.input.display(), e))?;

    store.dispatch(EditorAction::ActivateParagraph {
        page: args.page,
        paragraph: args.paragraph,
    });
    if !store.state().active().is_active() {
        return Err(anyhow!(
            "No paragraph {} on page {} of {}",
            args.paragraph,
            args.page,
            args.input.display()
        ));
    }

    println!("✏️  {} {}", "Editing".green().bold(), args.input.display());
    println!("   Page {}, paragraph {}", args.page, args.paragraph);
    println!("   Before: {}", store.state().active_text().unwrap_or_default().dimmed());
    println!();

    let mut clipboard = MemoryClipboard::new();
    let changes = run_script(&mut store, &steps, &mut clipboard);
    info!(steps = steps.len(), changes, "script applied");

    let state = store.state();
    println!(
        "✨ {} {} steps, {} changes",
        "Done".green().bold(),
        steps.len(),
        changes
    );
    println!("   Text:      {}", state.active_text().unwrap_or_default());
    println!("   Caret:     {}", state.caret_index());
    if state.has_selection() {
        println!(
            "   Selection: {}..{} {:?}",
            state.selection_start(),
            state.selection_start() + state.selection_length(),
            state.selected_text()
        );
    } else {
        println!("   Selection: {}", "none".dimmed());
    }
    println!("   Lines:     {}", state.active_layout().map_or(0, |lines| lines.len()));
    if let Some(text) = clipboard.get_text() {
        println!("   Clipboard: {:?}", text);
    }

    Ok(())
}

/// Apply every step in order; returns how many changed the state
pub fn run_script(store: &mut EditorStore, steps: &[ScriptStep], clipboard: &mut MemoryClipboard) -> usize {
    let mut changes = 0;
    for step in steps {
        let changed = match step {
            ScriptStep::Clipboard { clipboard: op } => match op {
                ClipboardStep::Copy => {
                    store.copy(clipboard);
                    false
                }
                ClipboardStep::Cut => store.cut(clipboard),
                ClipboardStep::Paste => store.paste(&*clipboard),
            },
            ScriptStep::Action(action) => store.dispatch(action.clone()),
        };
        if changed {
            changes += 1;
        }
    }
    changes
}
