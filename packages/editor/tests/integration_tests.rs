//! Integration tests for editor crate

use livepdf_common::{MockFileSystem, Point, Rect};
use livepdf_editor::{
    CaretMovement, ClipboardProvider, EditorAction, EditorConfig, EditorError, EditorState, EditorStore,
    MemoryClipboard,
};
use livepdf_parser::{parse, DocumentLoadError, GlyphDumpSource, GlyphRecord, PageRecord, RawDocument};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

const CHAR_WIDTH: f64 = 6.0;

/// Glyph records for one line of 12pt text starting at x=72
fn line(text: &str, baseline_y: f64) -> Vec<GlyphRecord> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let x = 72.0 + i as f64 * CHAR_WIDTH;
            GlyphRecord::new(
                c,
                "Helvetica",
                12.0,
                Rect::new(x, baseline_y - 2.0, x + CHAR_WIDTH, baseline_y + 10.0),
                Point::new(x, baseline_y),
            )
        })
        .collect()
}

fn raw(lines: &[(&str, f64)]) -> RawDocument {
    RawDocument {
        pages: vec![PageRecord {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            glyphs: lines.iter().flat_map(|(text, y)| line(text, *y)).collect(),
            images: vec![],
        }],
    }
}

fn store(lines: &[(&str, f64)]) -> EditorStore {
    EditorStore::new(parse(&raw(lines)), EditorConfig::default())
}

/// Store with the first paragraph active
fn editing(lines: &[(&str, f64)]) -> EditorStore {
    let mut store = store(lines);
    assert!(store.dispatch(EditorAction::ActivateParagraph { page: 0, paragraph: 0 }));
    store
}

fn set_caret(store: &mut EditorStore, index: usize, extend_selection: bool) {
    store.dispatch(EditorAction::SetCaret {
        index,
        extend_selection,
    });
}

fn text(store: &EditorStore) -> String {
    store.state().active_text().unwrap_or_default()
}

#[test]
fn test_right_by_word_from_end_of_first_word() {
    let mut store = editing(&[("Hello World", 700.0)]);
    set_caret(&mut store, 5, false);

    store.dispatch(EditorAction::MoveCaret {
        direction: CaretMovement::RightByWord,
        extend_selection: false,
    });

    assert_eq!(store.state().caret_index(), 11);
    assert!(!store.state().has_selection());
}

#[test]
fn test_left_by_word_stops_behind_whitespace() {
    let mut store = editing(&[("Hello World", 700.0)]);
    let left_by_word = |store: &mut EditorStore| {
        store.dispatch(EditorAction::MoveCaret {
            direction: CaretMovement::LeftByWord,
            extend_selection: false,
        });
        store.state().caret_index()
    };

    set_caret(&mut store, 6, false);
    assert_eq!(left_by_word(&mut store), 6);

    set_caret(&mut store, 9, false);
    assert_eq!(left_by_word(&mut store), 6);

    set_caret(&mut store, 4, false);
    assert_eq!(left_by_word(&mut store), 0);
}

#[test]
fn test_insert_text_goes_at_current_caret() {
    let mut store = editing(&[("Hello", 700.0)]);
    set_caret(&mut store, 5, false);

    assert!(store.dispatch(EditorAction::InsertText {
        caret_index: 0,
        text: "!".to_string(),
    }));

    assert_eq!(text(&store), "Hello!");
    assert_eq!(store.state().caret_index(), 6);
}

#[test]
fn test_insert_into_empty_paragraph_is_noop() {
    let mut store = editing(&[("Hello World", 700.0)]);
    assert!(store.dispatch(EditorAction::Delete {
        caret_index: 0,
        count: 11
    }));
    assert_eq!(store.state().glyph_count(), 0);

    let before = store.state();
    let changed = store.dispatch(EditorAction::InsertText {
        caret_index: 0,
        text: "Hi".to_string(),
    });

    assert!(!changed);
    assert_eq!(store.state().glyph_count(), 0);
    assert_eq!(store.state().version(), before.version());
    assert!(store.state().is_consistent());
}

#[test]
fn test_cut_removes_selected_prefix() {
    let mut store = editing(&[("Hello World", 700.0)]);
    set_caret(&mut store, 0, false);
    set_caret(&mut store, 3, true);
    assert_eq!(store.state().selection_length(), 3);

    assert!(store.dispatch(EditorAction::Cut));

    let state = store.state();
    assert_eq!(state.glyph_count(), 8);
    assert_eq!(state.caret_index(), 0);
    assert!(!state.has_selection());
    assert_eq!(text(&store), "lo World");
}

#[test]
fn test_click_past_line_end_stays_on_that_line() {
    let mut store = store(&[("Hello there ", 700.0), ("more text", 686.0)]);
    let state = store.state();
    let id = state.paragraph_id(0, 0).unwrap();
    let lines = state.layout(id).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 12);

    let baseline = lines[0].baseline_y;
    store.dispatch(EditorAction::ActivateAndSetCaret {
        page: 0,
        paragraph: 0,
        point: Point::new(500.0, baseline + 15.0),
    });
    assert_eq!(store.state().caret_index(), 12);

    // Within both bands: the first line still wins
    store.dispatch(EditorAction::ActivateAndSetCaret {
        page: 0,
        paragraph: 0,
        point: Point::new(500.0, baseline - 15.0),
    });
    assert_eq!(store.state().caret_index(), 12);

    // Outside every band: end of paragraph
    store.dispatch(EditorAction::ActivateAndSetCaret {
        page: 0,
        paragraph: 0,
        point: Point::new(80.0, baseline + 100.0),
    });
    assert_eq!(store.state().caret_index(), 21);
}

#[test]
fn test_click_on_page_activates_paragraph() {
    let mut store = store(&[("Heading", 740.0), ("Hello there ", 700.0), ("more text", 686.0)]);

    assert!(!store.click(0, Point::new(400.0, 400.0)));
    assert!(!store.state().active().is_active());

    // Left half of the "e" at x 132..138 sits just before the trailing space
    assert!(store.click(0, Point::new(140.0, 700.0)));
    let state = store.state();
    assert_eq!(state.active().id(), state.paragraph_id(0, 1));
    assert_eq!(state.caret_index(), 11);
}

#[test]
fn test_vertical_movement_and_line_ends() {
    let mut store = editing(&[("Hello there ", 700.0), ("more text", 686.0)]);
    set_caret(&mut store, 2, false);

    let move_caret = |store: &mut EditorStore, direction| {
        store.dispatch(EditorAction::MoveCaret {
            direction,
            extend_selection: false,
        });
        store.state().caret_index()
    };

    assert_eq!(move_caret(&mut store, CaretMovement::Down), 14);
    assert_eq!(move_caret(&mut store, CaretMovement::End), 21);
    assert_eq!(move_caret(&mut store, CaretMovement::Home), 12);
    assert_eq!(move_caret(&mut store, CaretMovement::Up), 0);
    assert_eq!(move_caret(&mut store, CaretMovement::Up), 0);
    assert_eq!(move_caret(&mut store, CaretMovement::LeftByWord), 0);
}

#[test]
fn test_vertical_movement_from_paragraph_end_keeps_caret() {
    let mut store = editing(&[("Hello there ", 700.0), ("more text", 686.0)]);
    set_caret(&mut store, 21, false);

    for direction in [CaretMovement::Up, CaretMovement::Down] {
        assert!(!store.dispatch(EditorAction::MoveCaret {
            direction,
            extend_selection: false,
        }));
        assert_eq!(store.state().caret_index(), 21);
    }
}

#[test]
fn test_typing_reflows_paragraph() {
    let mut store = editing(&[("Hello there ", 700.0), ("more text", 686.0)]);
    set_caret(&mut store, 6, false);

    store.dispatch(EditorAction::InsertText {
        caret_index: 6,
        text: "out ".to_string(),
    });

    let state = store.state();
    assert_eq!(text(&store), "Hello out there more text");
    assert_eq!(state.caret_index(), 10);

    let lines = state.active_layout().unwrap();
    let laid_out: String = lines.iter().map(|line| line.text()).collect();
    assert_eq!(laid_out, "Hello out there more text");
    let bounds = state.active_paragraph().unwrap().bounding_box;
    for line in lines {
        let line_bounds = line.bounds().unwrap();
        assert!(line_bounds.left >= bounds.left);
    }
    assert!(lines.len() >= 2);
}

#[test]
fn test_insert_uses_metrics_for_known_characters() {
    let mut store = editing(&[("Hello World", 700.0)]);

    store.dispatch(EditorAction::InsertText {
        caret_index: 0,
        text: "W".to_string(),
    });

    let state = store.state();
    let glyph = &state.active_paragraph().unwrap().glyphs[0];
    // "W" was parsed at x=108 in Helvetica 12pt
    assert_eq!(glyph.bounding_box, Rect::new(108.0, 698.0, 114.0, 710.0));
}

#[test]
fn test_caret_bounds_hold_for_any_sequence() {
    let mut store = editing(&[("The quick brown fox ", 700.0), ("jumps over the lazy dog", 686.0)]);

    let directions = [
        CaretMovement::Left,
        CaretMovement::Right,
        CaretMovement::LeftByWord,
        CaretMovement::RightByWord,
        CaretMovement::Up,
        CaretMovement::Down,
        CaretMovement::Home,
        CaretMovement::End,
    ];

    // Small linear congruential sequence, fixed seed
    let mut seed: u64 = 0x2545_f491;
    let mut next = |bound: usize| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 33) as usize) % bound.max(1)
    };

    for step in 0..500 {
        let len = store.state().glyph_count();
        let action = match next(5) {
            0 => EditorAction::MoveCaret {
                direction: directions[next(directions.len())],
                extend_selection: next(2) == 0,
            },
            1 => EditorAction::SetCaret {
                index: next(len + 4),
                extend_selection: next(2) == 0,
            },
            2 => EditorAction::Delete {
                caret_index: next(len + 2),
                count: next(3),
            },
            3 => EditorAction::InsertText {
                caret_index: next(len + 1),
                text: "ab ".to_string(),
            },
            _ => EditorAction::SelectAll,
        };
        store.dispatch(action.clone());

        let state = store.state();
        let len = state.glyph_count();
        assert!(state.caret_index() <= len, "step {step}: {action:?}");
        assert!(state.selection_anchor() <= len, "step {step}: {action:?}");
        assert_eq!(state.has_selection(), state.selection_anchor() != state.caret_index());
        assert_eq!(state.selection_start(), state.selection_anchor().min(state.caret_index()));
        assert_eq!(state.selection_length(), state.selection_anchor().abs_diff(state.caret_index()));
        assert!(state.is_consistent());
    }
}

#[test]
fn test_observers_fire_only_on_change() {
    let mut store = editing(&[("Hello World", 700.0)]);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |state: &EditorState| sink.borrow_mut().push(state.version()));

    assert!(store.dispatch(EditorAction::SelectAll));
    assert!(!store.dispatch(EditorAction::SelectAll));
    assert!(!store.dispatch(EditorAction::Delete {
        caret_index: 20,
        count: 1
    }));
    assert!(store.dispatch(EditorAction::MoveCaret {
        direction: CaretMovement::Home,
        extend_selection: false
    }));

    assert_eq!(*seen.borrow(), vec![2, 3]);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(EditorAction::SelectAll);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_clipboard_cut_and_paste() {
    let mut store = editing(&[("Hello World", 700.0)]);
    let mut clipboard = MemoryClipboard::new();

    assert!(!store.copy(&mut clipboard));

    set_caret(&mut store, 6, false);
    set_caret(&mut store, 11, true);
    assert!(store.cut(&mut clipboard));
    assert_eq!(text(&store), "Hello ");
    assert_eq!(clipboard.get_text().as_deref(), Some("World"));

    set_caret(&mut store, 0, false);
    assert!(store.paste(&clipboard));
    assert_eq!(text(&store), "WorldHello ");
    assert_eq!(store.state().caret_index(), 5);
}

#[test]
fn test_caret_and_selection_geometry() {
    let mut store = store(&[("Hello there ", 700.0), ("more text", 686.0)]);
    assert_eq!(store.state().caret_rect(), None);

    store.dispatch(EditorAction::ActivateParagraph { page: 0, paragraph: 0 });
    let state = store.state();
    let caret = state.caret_rect().unwrap();
    assert_eq!(caret.left, 72.0);
    assert_eq!(caret.width(), 1.0);
    assert_eq!(caret.top, 710.0);
    assert!(state.selection_rects().is_empty());

    store.dispatch(EditorAction::SelectAll);
    let rects = store.state().selection_rects();
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[0].left, 72.0);
    assert_eq!(rects[0].right, 144.0);
    assert!(rects[1].top < rects[0].top);
}

#[test]
fn test_caret_rect_at_wrap_boundary_stays_on_earlier_line() {
    let mut store = editing(&[("Hello there ", 700.0), ("more text", 686.0)]);
    set_caret(&mut store, 12, false);

    let state = store.state();
    let lines = state.active_layout().unwrap();
    let caret = state.caret_rect().unwrap();
    assert_eq!(caret.left, 144.0);
    assert_eq!(caret.top, lines[0].baseline_y);

    // Home from the same caret lands on the start of that line
    store.dispatch(EditorAction::MoveCaret {
        direction: CaretMovement::Home,
        extend_selection: false,
    });
    assert_eq!(store.state().caret_index(), 0);

    set_caret(&mut store, 13, false);
    let caret = store.state().caret_rect().unwrap();
    assert_eq!(caret.top, lines[1].baseline_y);
}

#[test]
fn test_snapshots_survive_later_edits() {
    let mut store = editing(&[("Hello World", 700.0)]);
    let before = store.state();

    store.dispatch(EditorAction::Delete {
        caret_index: 0,
        count: 6,
    });

    assert_eq!(before.active_text().as_deref(), Some("Hello World"));
    assert_eq!(text(&store), "World");
    assert_eq!(store.state().version(), before.version() + 1);
}

#[test]
fn test_open_through_mock_file_system() -> anyhow::Result<()> {
    let mut fs = MockFileSystem::new();
    fs.add_file("letter.json", serde_json::to_string(&raw(&[("Dear reader,", 700.0)]))?);
    fs.add_file("broken.json", "{ \"pages\": [");
    let source = GlyphDumpSource::with_file_system(fs);

    let mut store = EditorStore::open(&source, Path::new("letter.json"), EditorConfig::default())?;
    assert_eq!(store.state().pages().len(), 1);
    assert!(store.dispatch(EditorAction::ActivateParagraph { page: 0, paragraph: 0 }));
    assert_eq!(text(&store), "Dear reader,");

    let err = EditorStore::open(&source, Path::new("broken.json"), EditorConfig::default()).unwrap_err();
    assert!(matches!(err, EditorError::Load(ref load) if load.is_corrupt()));

    let err = EditorStore::open(&source, Path::new("missing.json"), EditorConfig::default()).unwrap_err();
    assert!(matches!(err, EditorError::Load(DocumentLoadError::NotFound(_))));

    // Reloading resets the editing context but keeps counting versions
    let version = store.state().version();
    store.load_document(&source, Path::new("letter.json"))?;
    assert!(!store.state().active().is_active());
    assert_eq!(store.state().version(), version + 1);
    Ok(())
}
