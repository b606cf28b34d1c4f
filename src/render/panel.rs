//! Panel drawing - borders, titles, and geometry-driven row content.
//!
//! There is no retained scene graph: every function emits escape sequences
//! and glyphs straight into the output stream, and every frame redraws in
//! full. Domain content (directory entries, drive labels) is supplied by the
//! caller; this module only knows rectangles and scroll offsets.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::layout::Panel;

use super::ansi;

/// Rounded border glyphs.
const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Display columns assumed per icon glyph.
///
/// Emoji icons usually render two cells wide; terminals that disagree will
/// misalign the padding. Unverified per terminal.
pub const ICON_COLUMNS: usize = 2;

// =============================================================================
// Borders
// =============================================================================

/// Draw a panel border with an optional title overlay.
///
/// Emits the top border row, `height - 2` interior rows of space between
/// vertical rules, and the bottom border row. The title is overlaid last,
/// starting at `(x + 1, y)` and truncated to `width - 1` characters, so it
/// replaces the leading glyphs of the already-drawn top border.
pub fn draw_panel<W: Write>(w: &mut W, panel: &Panel, title: Option<&str>) -> std::io::Result<()> {
    if panel.width < 2 || panel.height < 2 {
        return Ok(());
    }

    let inner = (panel.width - 2) as usize;

    ansi::move_to(w, panel.x, panel.y)?;
    write!(
        w,
        "{TOP_LEFT}{}{TOP_RIGHT}",
        HORIZONTAL.to_string().repeat(inner)
    )?;

    for row in 1..panel.height - 1 {
        ansi::move_to(w, panel.x, panel.y + row)?;
        write!(w, "{VERTICAL}{}{VERTICAL}", " ".repeat(inner))?;
    }

    ansi::move_to(w, panel.x, panel.y + panel.height - 1)?;
    write!(
        w,
        "{BOTTOM_LEFT}{}{BOTTOM_RIGHT}",
        HORIZONTAL.to_string().repeat(inner)
    )?;

    if let Some(title) = title {
        ansi::move_to(w, panel.x + 1, panel.y)?;
        for ch in title.chars().take(panel.width as usize - 1) {
            write!(w, "{ch}")?;
        }
    }

    Ok(())
}

// =============================================================================
// Content Rows
// =============================================================================

/// One renderable content row: an icon glyph plus a label.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub icon: char,
    pub label: &'a str,
    /// Render the label dimmed (hidden files).
    pub dim: bool,
}

/// Draw a scrolled, hover-highlighted item list into a panel's interior.
///
/// Renders the window `[scroll_y, scroll_y + height - 1)` of `rows`, one
/// entry per interior row. `hovered` is the on-screen row slot (0 = first
/// visible row) to highlight. Each row is padded with spaces to the panel
/// interior so stale glyphs from the previous frame are overwritten.
pub fn draw_rows<W: Write>(
    w: &mut W,
    panel: &Panel,
    rows: &[Row<'_>],
    hovered: Option<usize>,
) -> std::io::Result<()> {
    if panel.width < 2 || panel.height < 2 {
        return Ok(());
    }

    let scroll_y = panel.scroll_y as usize;
    let scroll_x = panel.scroll_x as usize;
    let window = rows.iter().skip(scroll_y).take(panel.height as usize - 1);

    for (slot, row) in window.enumerate() {
        ansi::move_to(w, panel.x + 1, panel.y + slot as u16 + 1)?;

        if hovered == Some(slot) {
            ansi::bg(w, 40, 40, 40)?;
        } else {
            ansi::reset(w)?;
        }

        write!(w, "{} ", row.icon)?;

        if row.dim {
            ansi::fg(w, 128, 128, 128)?;
        } else {
            ansi::fg(w, 255, 255, 255)?;
        }

        let visible: String = row
            .label
            .chars()
            .skip(scroll_x)
            .take(panel.width as usize - 1)
            .collect();
        write!(w, "{visible}")?;

        let used = ICON_COLUMNS + 1 + visible.as_str().width();
        let pad = (panel.width as usize - 2).saturating_sub(used);
        write!(w, "{}", " ".repeat(pad))?;
    }

    ansi::reset(w)
}

/// Draw a plain label list into a panel's interior (Computer panel).
///
/// No scroll and no hover; each label is truncated to `width - 1`
/// characters. Labels past the interior window are dropped.
pub fn draw_labels<W: Write>(w: &mut W, panel: &Panel, labels: &[String]) -> std::io::Result<()> {
    if panel.width < 2 || panel.height < 2 {
        return Ok(());
    }

    for (slot, label) in labels.iter().take(panel.height as usize - 1).enumerate() {
        ansi::move_to(w, panel.x + 1, panel.y + slot as u16 + 1)?;
        ansi::fg(w, 255, 255, 255)?;
        let visible: String = label.chars().take(panel.width as usize - 1).collect();
        write!(w, "{visible}")?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
