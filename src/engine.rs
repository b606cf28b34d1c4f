//! The update loop.
//!
//! One [`Engine`] owns everything mutable across frames: the event source
//! (with its injection stack), the current panel set, the cached terminal
//! size, and the mouse state. Each frame runs in strict sequence:
//!
//! ```text
//! drain events -> resize check (relayout + chrome only on change)
//!              -> redraw dynamic content (always)
//!              -> park cursor at the origin sentinel -> flush
//! ```
//!
//! All pending events are consumed before any redraw decision, so a resize
//! detected mid-drain is honored in the same frame. The loop exits only when
//! a frame signals quit - there is no external interrupt.

use std::io::{self, Write};
use std::time::Duration;

use crate::error::Result;
use crate::input::{ConsoleBackend, ConsoleEventSource, InputEvent, NativeConsole};
use crate::layout::{self, PanelId, PanelSet};
use crate::pacing::{DEFAULT_TARGET, FramePacer};
use crate::render::{OutputBuffer, ansi};

/// Keyboard character that quits the loop.
pub const DEFAULT_QUIT_KEY: char = 'q';

// =============================================================================
// Dialog
// =============================================================================

/// The seam between the update loop and whatever it is displaying.
///
/// The engine owns geometry and pacing; a dialog owns domain content and
/// reacts to events. `draw_chrome` runs only after a resize, `draw_content`
/// runs every frame.
pub trait Dialog {
    /// Handle one input event. Return `true` to request quit.
    fn handle_event(&mut self, event: &InputEvent, panels: &mut PanelSet) -> bool;

    /// Redraw borders and titles. Called after every relayout.
    fn draw_chrome(&mut self, out: &mut OutputBuffer, panels: &PanelSet);

    /// Redraw per-frame dynamic content. `hovered` is the content row slot
    /// under the mouse, when the mouse is over the content panel.
    fn draw_content(&mut self, out: &mut OutputBuffer, panels: &PanelSet, hovered: Option<usize>);
}

// =============================================================================
// Engine
// =============================================================================

/// Owns the per-frame state and drives a [`Dialog`] until it quits.
pub struct Engine<B: ConsoleBackend, W: Write> {
    source: ConsoleEventSource<B>,
    out: W,
    buffer: OutputBuffer,
    panels: Option<PanelSet>,
    last_size: (u16, u16),
    mouse_x: i16,
    mouse_y: i16,
    mouse_over_content: bool,
    quit_key: char,
    target_interval: Duration,
}

impl Engine<NativeConsole, io::Stdout> {
    /// Open the native console and write frames to stdout.
    pub fn new() -> Result<Self> {
        Self::with_parts(NativeConsole::new()?, io::stdout())
    }
}

impl<B: ConsoleBackend, W: Write> Engine<B, W> {
    /// Build an engine over any backend and output sink.
    pub fn with_parts(backend: B, out: W) -> Result<Self> {
        Ok(Self {
            source: ConsoleEventSource::new(backend)?,
            out,
            buffer: OutputBuffer::new(),
            panels: None,
            last_size: (0, 0),
            mouse_x: 0,
            mouse_y: 0,
            mouse_over_content: false,
            quit_key: DEFAULT_QUIT_KEY,
            target_interval: DEFAULT_TARGET,
        })
    }

    pub fn set_quit_key(&mut self, key: char) {
        self.quit_key = key;
    }

    pub fn set_target_interval(&mut self, interval: Duration) {
        self.target_interval = interval;
    }

    /// Direct access to the native console capabilities (title, cursor).
    pub fn console(&mut self) -> &mut B {
        self.source.backend_mut()
    }

    /// The event source, e.g. to inject synthetic events.
    pub fn source_mut(&mut self) -> &mut ConsoleEventSource<B> {
        &mut self.source
    }

    pub fn panels(&self) -> Option<&PanelSet> {
        self.panels.as_ref()
    }

    pub fn mouse_position(&self) -> (i16, i16) {
        (self.mouse_x, self.mouse_y)
    }

    pub fn mouse_over_content(&self) -> bool {
        self.mouse_over_content
    }

    /// Run one frame. Returns `true` when the loop should quit.
    pub fn step<D: Dialog>(&mut self, dialog: &mut D) -> Result<bool> {
        let mut quit = false;

        // (a) Drain every pending event before any redraw decision.
        while let Some(event) = self.source.poll() {
            match event {
                InputEvent::Keyboard {
                    character,
                    pressed: true,
                    ..
                } if character == self.quit_key as u32 => {
                    quit = true;
                }
                InputEvent::Mouse { x, y, .. } => {
                    self.mouse_x = x;
                    self.mouse_y = y;
                    self.mouse_over_content = match &self.panels {
                        Some(panels) => x > panels.get(PanelId::Directory).x as i16,
                        None => false,
                    };
                }
                _ => {}
            }

            if let Some(panels) = self.panels.as_mut() {
                if dialog.handle_event(&event, panels) {
                    quit = true;
                }
            }
        }

        // (b) Relayout only when the terminal size actually changed.
        let size = self.source.backend().size();
        if size != self.last_size {
            self.last_size = size;
            log::debug!("terminal size {}x{}, full relayout", size.0, size.1);

            let _ = ansi::erase_screen(&mut self.buffer);
            let panels = layout::compute_panels(size.0, size.1)?;
            dialog.draw_chrome(&mut self.buffer, &panels);
            self.panels = Some(panels);
        }

        // (c) Dynamic content redraws every frame regardless of resize.
        if let Some(panels) = &self.panels {
            let hovered = self.hovered_row();
            dialog.draw_content(&mut self.buffer, panels, hovered);
        }

        // (d) Park the cursor and emit the frame in one write.
        let _ = ansi::move_to(&mut self.buffer, 0, 0);
        self.buffer.flush_to(&mut self.out)?;

        Ok(quit)
    }

    /// Drive [`step`](Engine::step) through the frame pacer until a frame
    /// signals quit or fails.
    pub fn run<D: Dialog>(&mut self, dialog: &mut D) -> Result<()> {
        let mut pacer = FramePacer::new(self.target_interval);
        let mut failure = None;

        pacer.run_until_quit(|| match self.step(dialog) {
            Ok(quit) => quit,
            Err(e) => {
                failure = Some(e);
                true
            }
        });

        match failure {
            Some(e) => Err(e),
            None => {
                log::info!("update loop quit");
                Ok(())
            }
        }
    }

    /// Content row slot under the mouse, relative to the content panel's
    /// first interior row.
    fn hovered_row(&self) -> Option<usize> {
        if self.mouse_over_content && self.mouse_y >= 2 {
            Some(self.mouse_y as usize - 2)
        } else {
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButtons, MouseEventFlags};
    use std::collections::VecDeque;

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

    #[derive(Default)]
    struct Counting {
        chrome: usize,
        content: usize,
        events: usize,
    }

    impl Dialog for Counting {
        fn handle_event(&mut self, _event: &InputEvent, _panels: &mut PanelSet) -> bool {
            self.events += 1;
            false
        }

        fn draw_chrome(&mut self, _out: &mut OutputBuffer, _panels: &PanelSet) {
            self.chrome += 1;
        }

        fn draw_content(&mut self, _out: &mut OutputBuffer, _panels: &PanelSet, _h: Option<usize>) {
            self.content += 1;
        }
    }

    fn engine() -> Engine<Scripted, Vec<u8>> {
        Engine::with_parts(Scripted::new((80, 24)), Vec::new()).unwrap()
    }

    #[test]
    fn test_resize_idempotence() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        assert!(!engine.step(&mut dialog).unwrap());
        assert!(!engine.step(&mut dialog).unwrap());

        // One relayout for the first detected size, not two.
        assert_eq!(dialog.chrome, 1);
        // Content redraws every frame.
        assert_eq!(dialog.content, 2);
    }

    #[test]
    fn test_size_change_triggers_relayout() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        engine.step(&mut dialog).unwrap();
        engine.source_mut().backend_mut().size = (100, 30);
        engine.step(&mut dialog).unwrap();
        engine.step(&mut dialog).unwrap();

        assert_eq!(dialog.chrome, 2);
        assert_eq!(engine.panels().unwrap().get(PanelId::Directory).width, 100 - 25);
    }

    #[test]
    fn test_quit_key_press_quits() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        engine.source_mut().inject(InputEvent::key_press('q'));
        assert!(engine.step(&mut dialog).unwrap());
    }

    #[test]
    fn test_quit_key_release_does_not_quit() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        engine.source_mut().inject(InputEvent::Keyboard {
            character: 'q' as u32,
            pressed: false,
            virtual_key: 0x51,
            scan_code: 16,
        });
        assert!(!engine.step(&mut dialog).unwrap());
    }

    #[test]
    fn test_other_keys_do_not_quit() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        engine.source_mut().inject(InputEvent::key_press('x'));
        assert!(!engine.step(&mut dialog).unwrap());
        assert_eq!(dialog.events, 0); // no panel set during the first drain
    }

    #[test]
    fn test_mouse_tracking_and_over_content_flag() {
        let mut engine = engine();
        let mut dialog = Counting::default();

        // First frame lays out panels (Directory starts at x = 25).
        engine.step(&mut dialog).unwrap();

        engine.source_mut().inject(InputEvent::Mouse {
            x: 40,
            y: 6,
            buttons: MouseButtons::empty(),
            flags: MouseEventFlags::MOVED,
        });
        engine.step(&mut dialog).unwrap();

        assert_eq!(engine.mouse_position(), (40, 6));
        assert!(engine.mouse_over_content());

        engine.source_mut().inject(InputEvent::Mouse {
            x: 3,
            y: 6,
            buttons: MouseButtons::empty(),
            flags: MouseEventFlags::MOVED,
        });
        engine.step(&mut dialog).unwrap();
        assert!(!engine.mouse_over_content());
    }

    #[test]
    fn test_too_small_terminal_is_an_error() {
        let mut engine = Engine::with_parts(Scripted::new((4, 4)), Vec::new()).unwrap();
        let mut dialog = Counting::default();
        assert!(engine.step(&mut dialog).is_err());
    }

    #[test]
    fn test_run_drives_until_quit() {
        let mut engine = engine();
        engine.set_target_interval(Duration::ZERO);
        let mut dialog = Counting::default();

        engine.source_mut().inject(InputEvent::key_press('q'));
        engine.run(&mut dialog).unwrap();

        // The quit frame still redraws content.
        assert_eq!(dialog.content, 1);
    }
}
