//! Panel layout engine.
//!
//! Computes the five-panel dialog layout from the terminal dimensions.
//! The panel set is recomputed from scratch on every resize; panels are
//! never adjusted in place, so scroll offsets reset with the geometry.
//!
//! ```text
//! ╭ Search ────╮ ╭ Current Directory ───────╮
//! ╰────────────╯ │                          │
//! ╭ Recents ───╮ │                          │
//! ╰────────────╯ │                          │
//! ╭ Favorites ─╮ │                          │
//! ╰────────────╯ │                          │
//! ╭ Computer ──╮ │                          │
//! ╰────────────╯ ╰──────────────────────────╯
//! ```

use crate::error::{Error, Result};

/// Minimum terminal width that still fits every bordered panel.
pub const MIN_WIDTH: u16 = 6;

/// Minimum terminal height that still fits every bordered panel.
pub const MIN_HEIGHT: u16 = 6;

/// Number of panels in the dialog.
pub const PANEL_COUNT: usize = 5;

/// Widest the left panel column ever gets.
const LEFT_COLUMN_MAX: u16 = 24;

// =============================================================================
// Panel
// =============================================================================

/// A rectangular screen region with position, size, and scroll offsets.
///
/// Invariant: `width >= 2 && height >= 2` - a border needs two cells per
/// axis. [`compute_panels`] refuses terminals that cannot satisfy this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panel {
    /// Column of the left border (0-indexed).
    pub x: u16,
    /// Row of the top border (0-indexed).
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// Horizontal viewport offset into content wider than the panel.
    pub scroll_x: u16,
    /// Vertical viewport offset into content taller than the panel.
    pub scroll_y: u16,
}

impl Panel {
    /// Create a panel at a position with a size and no scroll.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    /// Map a screen coordinate to a content row slot, if it hits one.
    ///
    /// Content rows start on the row below the top border and run for
    /// `height - 1` slots (the same window the row renderer draws).
    /// Border columns do not count as content.
    pub fn content_row(&self, x: i16, y: i16) -> Option<usize> {
        if x <= self.x as i16 || x >= (self.x + self.width) as i16 - 1 {
            return None;
        }
        let row = y - self.y as i16 - 1;
        if row < 0 || row >= self.height as i16 - 1 {
            return None;
        }
        Some(row as usize)
    }
}

// =============================================================================
// PanelSet
// =============================================================================

/// Identifies one of the five fixed panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Search = 0,
    Recents = 1,
    Favorites = 2,
    Computer = 3,
    /// The main content panel listing the current directory.
    Directory = 4,
}

impl PanelId {
    /// All panels in draw order.
    pub const ALL: [PanelId; PANEL_COUNT] = [
        PanelId::Search,
        PanelId::Recents,
        PanelId::Favorites,
        PanelId::Computer,
        PanelId::Directory,
    ];
}

/// The complete panel layout for one terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSet {
    panels: [Panel; PANEL_COUNT],
}

impl PanelSet {
    pub fn get(&self, id: PanelId) -> &Panel {
        &self.panels[id as usize]
    }

    pub fn get_mut(&mut self, id: PanelId) -> &mut Panel {
        &mut self.panels[id as usize]
    }

    /// Iterate panels in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }
}

// =============================================================================
// Layout Computation
// =============================================================================

/// Compute the panel set for a terminal of `width` x `height` cells.
///
/// The left column holds Search (fixed 3 rows) above Recents, Favorites and
/// Computer, which split the remaining rows evenly. The Current Directory
/// panel takes everything right of the column.
///
/// Fails with [`Error::TerminalTooSmall`] when any panel would drop below
/// the 2x2 border minimum.
pub fn compute_panels(width: u16, height: u16) -> Result<PanelSet> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(Error::TerminalTooSmall { width, height });
    }

    let left_width = (width / 3).min(LEFT_COLUMN_MAX);
    let mut y = 1;

    let search = Panel::new(0, y, left_width, 3);
    y += search.height;

    let rows = (height - 4) / 3;
    let recents = Panel::new(0, y, left_width, rows + 2);
    y += recents.height;
    let favorites = Panel::new(0, y, left_width, rows + 2);
    y += favorites.height;
    let computer = Panel::new(0, y, left_width, rows + 2);

    let directory = Panel::new(left_width + 1, 1, width - (left_width + 1), height - 4);

    Ok(PanelSet {
        panels: [search, recents, favorites, computer, directory],
    })
}

// =============================================================================
// Tests
// =============================================================================
