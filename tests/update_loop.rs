//! End-to-end frames through the public API: a scripted console backend
//! drives the engine, and the emitted escape stream is inspected directly.

use std::collections::VecDeque;
use std::time::Duration;

use filepick::{
    ConsoleBackend, ConsoleEventSource, Dialog, Engine, InputEvent, MouseButtons, MouseEventFlags,
    OutputBuffer, Panel, PanelId, PanelSet, Result, compute_panels,
    render::{self, Row},
};

// =============================================================================
// Scripted backend
// =============================================================================

struct Scripted {
    size: (u16, u16),
    queue: VecDeque<InputEvent>,
}

impl Scripted {
    fn new(size: (u16, u16)) -> Self {
        Self {
            size,
            queue: VecDeque::new(),
        }
    }

    fn with_events(size: (u16, u16), events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            size,
            queue: events.into_iter().collect(),
        }
    }
}

impl ConsoleBackend for Scripted {
    fn configure_mode(&mut self) -> Result<()> {
        Ok(())
    }

    fn poll(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }

    fn set_title(&mut self, _title: &str) {}
    fn set_cursor_visible(&mut self, _visible: bool) {}

    fn size(&self) -> (u16, u16) {
        self.size
    }
}

// =============================================================================
// Listing dialog
// =============================================================================

/// Minimal dialog: fixed labels in the content panel, counters for calls.
struct Listing {
    labels: Vec<String>,
    chrome_draws: usize,
    quit_requested: bool,
}

impl Listing {
    fn new(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            chrome_draws: 0,
            quit_requested: false,
        }
    }
}

impl Dialog for Listing {
    fn handle_event(&mut self, event: &InputEvent, _panels: &mut PanelSet) -> bool {
        if let InputEvent::Keyboard {
            character,
            pressed: true,
            ..
        } = event
        {
            if *character == 'x' as u32 {
                self.quit_requested = true;
                return true;
            }
        }
        false
    }

    fn draw_chrome(&mut self, out: &mut OutputBuffer, panels: &PanelSet) {
        self.chrome_draws += 1;
        for panel in panels.iter() {
            let _ = render::draw_panel(out, panel, None);
        }
    }

    fn draw_content(&mut self, out: &mut OutputBuffer, panels: &PanelSet, hovered: Option<usize>) {
        let rows: Vec<Row<'_>> = self
            .labels
            .iter()
            .map(|label| Row {
                icon: '-',
                label,
                dim: false,
            })
            .collect();
        let _ = render::draw_rows(out, panels.get(PanelId::Directory), &rows, hovered);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn golden_layout_reaches_the_engine() {
    let mut engine = Engine::with_parts(Scripted::new((80, 24)), Vec::new()).unwrap();
    let mut dialog = Listing::new(&[]);

    engine.step(&mut dialog).unwrap();

    let panels = engine.panels().unwrap();
    assert_eq!(*panels.get(PanelId::Directory), Panel::new(25, 1, 55, 20));
    assert_eq!(*panels.get(PanelId::Search), Panel::new(0, 1, 24, 3));
}

#[test]
fn first_frame_clears_and_draws_chrome_once() {
    let mut sink = Vec::new();
    {
        let mut engine = Engine::with_parts(Scripted::new((80, 24)), &mut sink).unwrap();
        let mut dialog = Listing::new(&["alpha"]);

        engine.step(&mut dialog).unwrap();
        engine.step(&mut dialog).unwrap();
        assert_eq!(dialog.chrome_draws, 1);
    }

    let text = String::from_utf8_lossy(&sink);
    // Exactly one screen clear - the second frame redrew only content.
    assert_eq!(text.matches("\x1b[2J").count(), 1);
    // Content appears in both frames.
    assert_eq!(text.matches("alpha").count(), 2);
    // Every frame parks the cursor at the origin sentinel.
    assert_eq!(text.matches("\x1b[1;1H").count(), 2);
}

#[test]
fn injected_events_preempt_scripted_queue() {
    let native = InputEvent::key_press('n');
    let mut source =
        ConsoleEventSource::new(Scripted::with_events((80, 24), [native])).unwrap();

    source.inject(InputEvent::key_press('1'));
    source.inject(InputEvent::key_press('2'));

    assert_eq!(source.poll(), Some(InputEvent::key_press('2')));
    assert_eq!(source.poll(), Some(InputEvent::key_press('1')));
    assert_eq!(source.poll(), Some(native));
    assert_eq!(source.poll(), None);
}

#[test]
fn resize_mid_drain_is_honored_same_frame() {
    let mut engine = Engine::with_parts(Scripted::new((80, 24)), Vec::new()).unwrap();
    let mut dialog = Listing::new(&[]);
    engine.step(&mut dialog).unwrap();

    // Shrink the terminal and queue an event; the same step must both
    // consume the event and relayout for the new size.
    engine.source_mut().backend_mut().size = (60, 20);
    engine.source_mut().inject(InputEvent::key_press('a'));
    engine.step(&mut dialog).unwrap();

    assert_eq!(dialog.chrome_draws, 2);
    assert_eq!(engine.panels().unwrap().get(PanelId::Directory).width, 60 - 21);
}

#[test]
fn quit_key_terminates_run() {
    let backend = Scripted::with_events((80, 24), [InputEvent::key_press('q')]);
    let mut engine = Engine::with_parts(backend, Vec::new()).unwrap();
    engine.set_target_interval(Duration::ZERO);

    let mut dialog = Listing::new(&[]);
    engine.run(&mut dialog).unwrap();
    assert!(!dialog.quit_requested);
}

#[test]
fn dialog_can_request_quit() {
    let mut engine = Engine::with_parts(Scripted::new((80, 24)), Vec::new()).unwrap();
    engine.set_target_interval(Duration::ZERO);
    let mut dialog = Listing::new(&[]);

    // Establish the layout first; dialogs only see events once panels exist.
    engine.step(&mut dialog).unwrap();
    engine.source_mut().inject(InputEvent::key_press('x'));
    engine.run(&mut dialog).unwrap();

    assert!(dialog.quit_requested);
}

#[test]
fn hover_follows_mouse_into_content_panel() {
    let mut sink = Vec::new();
    {
        let mut engine = Engine::with_parts(Scripted::new((80, 24)), &mut sink).unwrap();
        let mut dialog = Listing::new(&["alpha", "beta"]);

        engine.step(&mut dialog).unwrap();
        engine.source_mut().inject(InputEvent::Mouse {
            x: 30,
            y: 3, // second content row of the Directory panel
            buttons: MouseButtons::empty(),
            flags: MouseEventFlags::MOVED,
        });
        engine.step(&mut dialog).unwrap();
    }

    // The hover background shows up exactly once, on the "beta" row.
    let text = String::from_utf8_lossy(&sink);
    let hover_at = text.find("\x1b[48;2;40;40;40m").unwrap();
    assert!(text[hover_at..].contains("beta"));
    assert_eq!(text.matches("\x1b[48;2;40;40;40m").count(), 1);
}

#[test]
fn layout_golden_values_hold_through_public_api() {
    // left_width = min(24, floor(80/3)) = 24
    let set = compute_panels(80, 24).unwrap();
    assert_eq!(
        (
            set.get(PanelId::Directory).x,
            set.get(PanelId::Directory).y,
            set.get(PanelId::Directory).width,
            set.get(PanelId::Directory).height,
        ),
        (25, 1, 55, 20)
    );
}
