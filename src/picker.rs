//! The file selection dialog.
//!
//! Composes the engine, layout, and renderer into the actual picker:
//! five titled panels, a scrollable directory listing with hover
//! highlighting, a Computer panel listing Home and the available drives,
//! and click/wheel/Backspace navigation. Quit with `q`.

use std::path::{Path, PathBuf};

use crate::engine::{Dialog, Engine};
use crate::error::Result;
use crate::fs;
use crate::input::backend::ConsoleBackend;
use crate::input::{InputEvent, MouseButtons, MouseEventFlags};
use crate::layout::{PanelId, PanelSet};
use crate::render::{self, OutputBuffer, Row, ansi};

/// Panel titles, in [`PanelId`] draw order.
pub const PANEL_TITLES: [&str; 5] = [
    "\u{1F50E} Search ",
    "\u{1F680} Recents ",
    "\u{2B50} Favorites ",
    "\u{1F4BD} Computer ",
    "\u{1F5C3}\u{FE0F} Current Directory ",
];

const ICON_FILE: char = '\u{1F4C4}';
const ICON_DIRECTORY: char = '\u{1F4C2}';
const ICON_BACK: char = '\u{1F519}';

/// Backspace character code, for "up one directory".
const KEY_BACKSPACE: u32 = 0x08;

// =============================================================================
// Entries
// =============================================================================

/// What an entry in the directory listing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The leading `..` pseudo-entry.
    Back,
    Directory,
    File,
}

/// One row of the directory listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub label: String,
    pub kind: EntryKind,
}

// =============================================================================
// FilePicker
// =============================================================================

/// Dialog state: the browsed location and what lives there.
pub struct FilePicker {
    cwd: Vec<String>,
    home: Vec<String>,
    drives: Vec<String>,
    directories: Vec<String>,
    files: Vec<String>,
    selected: Vec<String>,
}

impl FilePicker {
    /// Start browsing at the given location (path segments).
    pub fn new(cwd: Vec<String>) -> Result<Self> {
        let mut picker = Self {
            cwd,
            home: fs::home_directory(),
            drives: fs::enumerate_drives(),
            directories: Vec::new(),
            files: Vec::new(),
            selected: Vec::new(),
        };
        picker.refresh()?;
        Ok(picker)
    }

    /// Paths chosen before the dialog closed.
    pub fn selection(&self) -> &[String] {
        &self.selected
    }

    /// The ordered listing: `..`, then directories, then files.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::with_capacity(1 + self.directories.len() + self.files.len());
        entries.push(Entry {
            label: "..".to_string(),
            kind: EntryKind::Back,
        });
        entries.extend(self.directories.iter().map(|name| Entry {
            label: name.clone(),
            kind: EntryKind::Directory,
        }));
        entries.extend(self.files.iter().map(|name| Entry {
            label: name.clone(),
            kind: EntryKind::File,
        }));
        entries
    }

    fn refresh(&mut self) -> Result<()> {
        let path = fs::join_segments(&self.cwd);
        let (directories, files) = fs::list_directory(Path::new(&path))?;
        self.directories = directories;
        self.files = files;
        Ok(())
    }

    fn go_up(&mut self, panels: &mut PanelSet) {
        if self.cwd.len() <= 1 {
            return;
        }
        let popped = self.cwd.pop();
        if let Err(e) = self.refresh() {
            log::warn!("cannot list parent directory: {e}");
            self.cwd.extend(popped);
        } else {
            panels.get_mut(PanelId::Directory).scroll_y = 0;
        }
    }

    fn enter(&mut self, name: &str, panels: &mut PanelSet) {
        self.cwd.push(name.to_string());
        if let Err(e) = self.refresh() {
            log::warn!("cannot list {name}: {e}");
            self.cwd.pop();
        } else {
            panels.get_mut(PanelId::Directory).scroll_y = 0;
        }
    }

    fn jump_to(&mut self, segments: Vec<String>, panels: &mut PanelSet) {
        if segments.is_empty() {
            return;
        }
        let previous = std::mem::replace(&mut self.cwd, segments);
        if let Err(e) = self.refresh() {
            log::warn!("cannot jump: {e}");
            self.cwd = previous;
        } else {
            panels.get_mut(PanelId::Directory).scroll_y = 0;
        }
    }

    /// Activate the entry at an absolute listing index. Returns `true` when
    /// a file was selected and the dialog should close.
    fn activate(&mut self, index: usize, panels: &mut PanelSet) -> bool {
        let entries = self.entries();
        let Some(entry) = entries.get(index) else {
            return false;
        };
        match entry.kind {
            EntryKind::Back => {
                self.go_up(panels);
                false
            }
            EntryKind::Directory => {
                let name = entry.label.clone();
                self.enter(&name, panels);
                false
            }
            EntryKind::File => {
                let mut segments = self.cwd.clone();
                segments.push(entry.label.clone());
                self.selected = vec![fs::join_segments(&segments)];
                log::info!("selected {}", self.selected[0]);
                true
            }
        }
    }

    fn scroll(&mut self, delta: i16, panels: &mut PanelSet) {
        let entry_count = 1 + self.directories.len() + self.files.len();
        let panel = panels.get_mut(PanelId::Directory);
        let window = panel.height as usize - 1;
        let max_scroll = entry_count.saturating_sub(window) as u16;

        if delta > 0 {
            panel.scroll_y = panel.scroll_y.saturating_sub(1);
        } else if delta < 0 {
            panel.scroll_y = (panel.scroll_y + 1).min(max_scroll);
        }
    }

    fn click(&mut self, x: i16, y: i16, panels: &mut PanelSet) -> bool {
        if let Some(slot) = panels.get(PanelId::Directory).content_row(x, y) {
            let index = panels.get(PanelId::Directory).scroll_y as usize + slot;
            return self.activate(index, panels);
        }

        if let Some(slot) = panels.get(PanelId::Computer).content_row(x, y) {
            if slot == 0 {
                self.jump_to(self.home.clone(), panels);
            } else if let Some(drive) = self.drives.get(slot - 1) {
                self.jump_to(vec![drive.clone()], panels);
            }
        }

        false
    }
}

impl Dialog for FilePicker {
    fn handle_event(&mut self, event: &InputEvent, panels: &mut PanelSet) -> bool {
        match *event {
            InputEvent::Keyboard {
                character: KEY_BACKSPACE,
                pressed: true,
                ..
            } => {
                self.go_up(panels);
                false
            }
            InputEvent::Mouse {
                x,
                y,
                buttons,
                flags,
            } => {
                if flags.contains(MouseEventFlags::WHEELED) {
                    self.scroll(buttons.wheel_delta(), panels);
                    false
                } else if buttons.contains(MouseButtons::LEFT)
                    && !flags.contains(MouseEventFlags::MOVED)
                {
                    self.click(x, y, panels)
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn draw_chrome(&mut self, out: &mut OutputBuffer, panels: &PanelSet) {
        let _ = ansi::fg(out, 128, 128, 128);
        for (panel, title) in panels.iter().zip(PANEL_TITLES) {
            let _ = render::draw_panel(out, panel, Some(title));
        }
    }

    fn draw_content(&mut self, out: &mut OutputBuffer, panels: &PanelSet, hovered: Option<usize>) {
        let entries = self.entries();
        let rows: Vec<Row<'_>> = entries
            .iter()
            .map(|entry| Row {
                icon: match entry.kind {
                    EntryKind::Back => ICON_BACK,
                    EntryKind::Directory => ICON_DIRECTORY,
                    EntryKind::File => ICON_FILE,
                },
                label: &entry.label,
                dim: entry.label.starts_with(['.', '_']),
            })
            .collect();
        let _ = render::draw_rows(out, panels.get(PanelId::Directory), &rows, hovered);

        let mut labels = Vec::with_capacity(1 + self.drives.len());
        labels.push("Home".to_string());
        labels.extend(self.drives.iter().cloned());
        let _ = render::draw_labels(out, panels.get(PanelId::Computer), &labels);
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Open the file selection dialog and return the chosen paths.
///
/// Browses from `start` (or the process working directory), runs the update
/// loop until a file is picked or `q` is pressed, and restores the cursor
/// and terminal attributes on the way out.
pub fn select(start: Option<PathBuf>) -> Result<Vec<String>> {
    let cwd = match start {
        Some(path) => fs::path_segments(&path),
        None => fs::current_directory()?,
    };

    let mut engine = Engine::new()?;
    engine.console().set_title("File Select");
    engine.console().set_cursor_visible(false);

    let mut picker = FilePicker::new(cwd)?;
    let outcome = engine.run(&mut picker);

    // Restore the terminal even when the loop failed.
    engine.console().set_cursor_visible(true);
    {
        use std::io::Write;
        let mut stdout = std::io::stdout();
        let _ = ansi::reset(&mut stdout);
        let _ = stdout.flush();
    }

    outcome?;
    Ok(picker.selection().to_vec())
}

// =============================================================================
// Tests
// =============================================================================
