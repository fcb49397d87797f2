//! Movable sprite state and the dirty-region geometry behind trace erase.
//!
//! A [`Sprite`] remembers both its current position and the position it was
//! last drawn at. When it moves, [`stale_pages`] and [`stale_columns`]
//! compute the minimal set of 8-row pages and column ranges that the old
//! footprint still owns — the only region that has to be blanked before the
//! sprite is redrawn. Everything the new footprint covers is excluded, so a
//! move never erases pixels the next draw call immediately repaints.

/// Axis-aligned rectangle in pixel coordinates, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// Leftmost column.
    pub left: u8,
    /// Topmost row.
    pub top: u8,
    /// Rightmost column.
    pub right: u8,
    /// Bottommost row.
    pub bottom: u8,
}

/// A movable 8-row-tall bitmap.
///
/// The bitmap itself is borrowed, one byte per column with bit 0 at the top;
/// the sprite only tracks where it is and where it was last drawn.
///
/// Move the sprite by assigning `x`/`y` (or via [`move_to`](Self::move_to)),
/// then call `erase_trace` followed by `draw_sprite` on the driver. The
/// last-drawn position updates only when the sprite is actually drawn.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sprite<'a> {
    /// Current left edge in pixels.
    pub x: u8,
    /// Current top edge in pixels.
    pub y: u8,
    /// Width in pixels.
    pub w: u8,
    /// Left edge at the last draw.
    pub(crate) lx: u8,
    /// Top edge at the last draw.
    pub(crate) ly: u8,
    /// Column bitmap, `w` bytes.
    pub data: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Create a sprite at `(x, y)`. The last-drawn position starts out equal
    /// to the current one, so an immediate trace erase is a no-op.
    pub fn new(x: u8, y: u8, w: u8, data: &'a [u8]) -> Self {
        Self {
            x,
            y,
            w,
            lx: x,
            ly: y,
            data,
        }
    }

    /// Move the current position. Wire traffic happens later, on erase/draw.
    pub fn move_to(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }

    /// Position the sprite was last drawn at.
    pub fn last_pos(&self) -> (u8, u8) {
        (self.lx, self.ly)
    }

    /// Swap the bitmap, e.g. for animation frames. Position is untouched.
    pub fn replace_data(&mut self, data: &'a [u8]) {
        self.data = data;
    }

    /// Page-aligned bounding box of the current footprint.
    pub fn bounds(&self) -> Rect {
        Rect {
            left: self.x,
            top: self.y & !0x07,
            right: self.x.saturating_add(self.w.saturating_sub(1)),
            bottom: self.y.saturating_add(7) & !0x07,
        }
    }
}

/// First and last page touched by an 8-row footprint whose top row is `y`.
///
/// The footprint straddles two pages unless `y` is page-aligned.
pub(crate) fn page_extent(y: u8) -> (u8, u8) {
    (y >> 3, ((y as u16 + 7) >> 3) as u8)
}

/// Pages of the old footprint that must be blanked after a vertical move
/// from `ly` to `y`, inclusive. `None` means the vertical pass writes
/// nothing.
///
/// Moving down, the pages the new footprint occupies are excluded so the
/// upcoming redraw is not erased out from under itself; a move that stays
/// within the top page therefore has nothing to blank (the redraw's
/// zero-padded column bytes cover the trailing rows). Moving up, only the
/// old bottom page holds rows the new footprint has left behind.
pub(crate) fn stale_pages(ly: u8, y: u8) -> Option<(u8, u8)> {
    let (top, bottom) = page_extent(ly);
    if ly < y {
        let limit = (y >> 3).checked_sub(1)?;
        if limit < top {
            return None;
        }
        Some((top, bottom.min(limit)))
    } else {
        Some((bottom, bottom))
    }
}

/// Columns of the old footprint left uncovered by a horizontal move from
/// `lx` to `x`, inclusive. `None` means the horizontal pass writes nothing.
///
/// Moving left leaves a strip at the old right edge, moving right at the old
/// left edge; when old and new footprints fully overlap the range is empty.
pub(crate) fn stale_columns(lx: u8, x: u8, w: u8) -> Option<(u8, u8)> {
    if lx == x || w == 0 {
        return None;
    }
    let mut left = lx as u16;
    let mut right = lx as u16 + w as u16 - 1;
    if x < lx {
        left = left.max(x as u16 + w as u16);
    } else {
        right = right.min(x as u16 - 1);
    }
    if right < left {
        return None;
    }
    Some((left as u8, right as u8))
}
