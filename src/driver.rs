//! Bufferless SSD1306 driver core.
//!
//! [`Ssd1306Xled`] owns the bus interface plus the three pieces of drawing
//! state the controller itself does not hold: the panel size, the invert
//! byte XORed into every data byte, and the active font. There is no frame
//! buffer — every primitive addresses a RAM window and streams bytes
//! straight to the controller.
//!
//! # Lifecycle
//!
//! 1. [`Ssd1306Xled::new()`] — constructs the driver without bus traffic.
//! 2. [`Ssd1306Xled::init()`] — sends the panel bring-up sequence.
//! 3. Drawing primitives and sprite operations, in any order.
//!
//! # Example
//!
//! ```no_run
//! use ssd1306_xled::{DisplaySize, I2CDisplayInterface, Ssd1306Xled, Sprite};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) -> Result<(), display_interface::DisplayError> {
//! let interface = I2CDisplayInterface::new(i2c);
//! let mut display = Ssd1306Xled::new(interface, DisplaySize::Size128x64);
//! display.init()?;
//! display.clear()?;
//!
//! let frames = [0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x7E, 0x3C, 0x18];
//! let mut sprite = Sprite::new(10, 3, 8, &frames);
//! display.draw_sprite(&mut sprite)?;
//!
//! sprite.move_to(11, 4);
//! display.erase_trace(&sprite)?;
//! display.draw_sprite(&mut sprite)?;
//! # Ok(())
//! # }
//! ```

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use display_interface_i2c::I2CInterface;
use embedded_hal::i2c::I2c;

use crate::command::{AddrMode, Command, VcomhLevel};
use crate::font::{Font6x8, FontStyle};
use crate::size::DisplaySize;
use crate::sprite::{page_extent, stale_columns, stale_pages, Sprite};
use crate::WIDTH;

/// Default 7-bit I2C address of SSD1306 modules.
const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// I2C control byte marking a data transmission.
const DATA_BYTE: u8 = 0x40;

/// Helper for wiring an I2C peripheral to the display bus contract.
///
/// Produces a [`display_interface_i2c::I2CInterface`] preconfigured with the
/// SSD1306 data marker byte.
pub struct I2CDisplayInterface(());

impl I2CDisplayInterface {
    /// Bind `i2c` at the default address `0x3C`.
    pub fn new<I>(i2c: I) -> I2CInterface<I>
    where
        I: I2c,
    {
        Self::new_custom_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Bind `i2c` at the alternate address `0x3D`.
    pub fn new_alternate_address<I>(i2c: I) -> I2CInterface<I>
    where
        I: I2c,
    {
        Self::new_custom_address(i2c, 0x3D)
    }

    /// Bind `i2c` at an arbitrary 7-bit address.
    pub fn new_custom_address<I>(i2c: I, address: u8) -> I2CInterface<I>
    where
        I: I2c,
    {
        I2CInterface::new(i2c, address, DATA_BYTE)
    }
}

/// Bufferless SSD1306 driver.
///
/// Generic over any [`WriteOnlyDataCommand`] bus, so the same driver runs
/// over I2C, SPI, or a recording mock in tests.
pub struct Ssd1306Xled<DI> {
    interface: DI,
    size: DisplaySize,
    /// XORed into every data byte; 0x00 positive, 0xFF negative.
    invert: u8,
    font: Font6x8,
}

impl<DI> Ssd1306Xled<DI>
where
    DI: WriteOnlyDataCommand,
{
    /// Construct a driver. No bus traffic until [`init()`](Self::init).
    pub fn new(interface: DI, size: DisplaySize) -> Self {
        Self {
            interface,
            size,
            invert: 0x00,
            font: Font6x8::default(),
        }
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u8 {
        self.size.height()
    }

    /// Panel size variant.
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Swap the active 6×8 glyph table.
    pub fn set_font(&mut self, font: Font6x8) {
        self.font = font;
    }

    /// Give the bus interface back, consuming the driver.
    pub fn release(self) -> DI {
        self.interface
    }

    // -----------------------------------------------------------------------
    // Panel bring-up and mode commands
    // -----------------------------------------------------------------------

    /// Send the bring-up sequence for the configured panel and switch the
    /// display on.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let iface = &mut self.interface;
        Command::DisplayOn(false).send(iface)?;
        Command::DisplayClockDiv(0x8, 0x0).send(iface)?;
        Command::Multiplex(self.size.height() - 1).send(iface)?;
        Command::DisplayOffset(0).send(iface)?;
        Command::StartLine(0).send(iface)?;
        Command::ChargePump(true).send(iface)?;
        Command::AddressMode(AddrMode::Horizontal).send(iface)?;
        Command::SegmentRemap(true).send(iface)?;
        Command::ReverseComDir(true).send(iface)?;
        self.size.com_pin_config().send(iface)?;
        Command::Contrast(self.size.contrast()).send(iface)?;
        Command::PreChargePeriod(0x1, 0xF).send(iface)?;
        Command::VcomhDeselect(VcomhLevel::Auto).send(iface)?;
        Command::AllOn(false).send(iface)?;
        Command::Invert(false).send(iface)?;
        Command::DisplayOn(true).send(iface)
    }

    /// Wake the panel (0xAF). RAM contents are retained while off.
    pub fn display_on(&mut self) -> Result<(), DisplayError> {
        Command::DisplayOn(true).send(&mut self.interface)
    }

    /// Put the panel to sleep (0xAE).
    pub fn display_off(&mut self) -> Result<(), DisplayError> {
        Command::DisplayOn(false).send(&mut self.interface)
    }

    /// Controller-level inversion: lit pixels render dark (0xA7).
    pub fn invert_mode(&mut self) -> Result<(), DisplayError> {
        Command::Invert(true).send(&mut self.interface)
    }

    /// Controller-level normal rendering (0xA6).
    pub fn normal_mode(&mut self) -> Result<(), DisplayError> {
        Command::Invert(false).send(&mut self.interface)
    }

    /// Invert every data byte written from now on. Content already on
    /// screen is unaffected.
    pub fn negative_mode(&mut self) {
        self.invert = 0xFF;
    }

    /// Stop inverting written data bytes.
    pub fn positive_mode(&mut self) {
        self.invert = 0x00;
    }

    // -----------------------------------------------------------------------
    // RAM addressing
    // -----------------------------------------------------------------------

    /// Set a `w`-column RAM window starting at column `x`, page `page`.
    /// Subsequent data wraps to the next page at the window's right edge.
    pub fn set_block(&mut self, x: u8, page: u8, w: u8) -> Result<(), DisplayError> {
        if w == 0 {
            return Ok(());
        }
        let end = x.saturating_add(w - 1).min(WIDTH - 1);
        Command::ColumnAddress(x, end).send(&mut self.interface)?;
        self.set_pos(x, page)
    }

    /// Point the RAM cursor at column `x`, page `page` without changing the
    /// window.
    pub fn set_pos(&mut self, x: u8, page: u8) -> Result<(), DisplayError> {
        Command::PageStart(page).send(&mut self.interface)?;
        Command::ColumnStart(x).send(&mut self.interface)
    }

    // -----------------------------------------------------------------------
    // Raster primitives
    // -----------------------------------------------------------------------

    /// Fill the whole surface with one column byte pattern.
    pub fn fill(&mut self, pattern: u8) -> Result<(), DisplayError> {
        self.set_block(0, 0, WIDTH)?;
        let count = self.size.pages() as usize * WIDTH as usize;
        self.write_data(core::iter::repeat(pattern).take(count))
    }

    /// Blank the whole surface.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.fill(0x00)
    }

    /// Light the single pixel at `(x, y)`, clearing the other seven rows of
    /// its column byte.
    pub fn put_pixel(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        self.set_block(0, 0, WIDTH)?;
        self.set_pos(x, y >> 3)?;
        self.write_data(core::iter::once(1 << (y & 0x07)))
    }

    /// Write one raw column byte at column `x`, page `page`.
    pub fn put_pixels(&mut self, x: u8, page: u8, bits: u8) -> Result<(), DisplayError> {
        self.set_block(0, 0, WIDTH)?;
        self.set_pos(x, page)?;
        self.write_data(core::iter::once(bits))
    }

    /// Blit a page-aligned bitmap of `w` columns and `h` rows (`h` a
    /// multiple of 8) with its top-left corner at column `x`, page `page`.
    ///
    /// `data` is laid out column-major within each page, top page first,
    /// `w * h/8` bytes total.
    pub fn draw_bitmap(
        &mut self,
        x: u8,
        page: u8,
        w: u8,
        h: u8,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        self.set_block(x, page, w)?;
        let count = w as usize * (h >> 3) as usize;
        self.write_data(data.iter().copied().take(count))
    }

    /// Blit an in-memory canvas. Identical wire traffic to
    /// [`draw_bitmap`](Self::draw_bitmap); kept as a separate entry point
    /// for canvases composed at runtime.
    pub fn draw_canvas(
        &mut self,
        x: u8,
        page: u8,
        w: u8,
        h: u8,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        self.draw_bitmap(x, page, w, h, data)
    }

    /// Blank a `w`-column, `h`-row page-aligned block at column `x`, page
    /// `page`.
    pub fn clear_block(&mut self, x: u8, page: u8, w: u8, h: u8) -> Result<(), DisplayError> {
        self.set_block(x, page, w)?;
        let count = w as usize * (h >> 3) as usize;
        self.write_blank(count)
    }

    /// Stamp a fixed 8×8 tile at column `x`, page `page` using the current
    /// cursor window.
    pub fn draw_tile(&mut self, x: u8, page: u8, tile: &[u8; 8]) -> Result<(), DisplayError> {
        self.set_pos(x, page)?;
        self.write_data(tile.iter().copied())
    }

    /// Render `text` in the active 6×8 font starting at column `x`, page
    /// `page`. Characters outside 0x20–0x7F render blank.
    pub fn draw_text(
        &mut self,
        x: u8,
        page: u8,
        text: &str,
        style: FontStyle,
    ) -> Result<(), DisplayError> {
        self.set_block(0, 0, WIDTH)?;
        self.set_pos(x, page)?;

        let font = self.font;
        let invert = self.invert;
        let mut columns = text.bytes().flat_map(move |ch| {
            let glyph = ch.wrapping_sub(0x20) as usize;
            // Bold and italic carry state between columns of one glyph.
            let mut carry = 0u8;
            (0..6usize).map(move |i| {
                let column = match style {
                    FontStyle::Normal => font.column(glyph, i),
                    FontStyle::Bold => {
                        let raw = font.column(glyph, i);
                        let mixed = raw | carry;
                        carry = raw;
                        mixed
                    }
                    FontStyle::Italic => {
                        let raw = font.raw_column(glyph * 6 + i + 1);
                        let mixed = (raw & 0xF0) | carry;
                        carry = raw & 0x0F;
                        mixed
                    }
                };
                column ^ invert
            })
        });
        self.interface.send_data(DataFormat::U8Iter(&mut columns))
    }

    // -----------------------------------------------------------------------
    // Sprite operations
    // -----------------------------------------------------------------------

    /// Draw the sprite at its current position and record that position as
    /// last-drawn.
    ///
    /// Each column byte is split across the two pages the sprite straddles:
    /// the top page gets the bits shifted down by `y % 8`, the next page the
    /// remainder. Pages beyond the panel are skipped.
    pub fn draw_sprite(&mut self, sprite: &mut Sprite<'_>) -> Result<(), DisplayError> {
        let page = sprite.y >> 3;
        let offset = sprite.y & 0x07;
        let pages = self.size.pages();
        let w = sprite.w as usize;

        if page < pages {
            self.set_pos(sprite.x, page)?;
            let data = sprite.data;
            self.write_data(data.iter().take(w).map(move |&b| b << offset))?;
        }
        if offset != 0 && page + 1 < pages {
            self.set_pos(sprite.x, page + 1)?;
            let data = sprite.data;
            self.write_data(data.iter().take(w).map(move |&b| b >> (8 - offset)))?;
        }

        sprite.lx = sprite.x;
        sprite.ly = sprite.y;
        Ok(())
    }

    /// Blank the sprite's current footprint. The last-drawn position is
    /// left untouched.
    pub fn erase_sprite(&mut self, sprite: &Sprite<'_>) -> Result<(), DisplayError> {
        let page = sprite.y >> 3;
        let offset = sprite.y & 0x07;
        let pages = self.size.pages();

        if page < pages {
            self.set_pos(sprite.x, page)?;
            self.write_blank(sprite.w as usize)?;
        }
        if offset != 0 && page + 1 < pages {
            self.set_pos(sprite.x, page + 1)?;
            self.write_blank(sprite.w as usize)?;
        }
        Ok(())
    }

    /// Blank only the part of the last-drawn footprint that the current
    /// position no longer covers.
    ///
    /// Two clipped passes: the stale 8-row pages of the old footprint at
    /// full sprite width, then the stale columns across every old page.
    /// Pixels the upcoming [`draw_sprite`](Self::draw_sprite) call will
    /// overwrite are excluded from both, so a move never flickers. An
    /// unmoved sprite produces zero bus traffic.
    pub fn erase_trace(&mut self, sprite: &Sprite<'_>) -> Result<(), DisplayError> {
        if sprite.x == sprite.lx && sprite.y == sprite.ly {
            return Ok(());
        }
        let pages = self.size.pages();

        if let Some((top, bottom)) = stale_pages(sprite.ly, sprite.y) {
            for page in top..=bottom {
                if page >= pages {
                    break;
                }
                self.set_pos(sprite.lx, page)?;
                self.write_blank(sprite.w as usize)?;
            }
        }

        if let Some((left, right)) = stale_columns(sprite.lx, sprite.x, sprite.w) {
            let (top, bottom) = page_extent(sprite.ly);
            for page in top..=bottom {
                if page >= pages {
                    break;
                }
                self.set_pos(left, page)?;
                self.write_blank((right - left + 1) as usize)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Data streaming
    // -----------------------------------------------------------------------

    /// Stream bytes as one data transmission, applying the invert byte.
    fn write_data<I>(&mut self, bytes: I) -> Result<(), DisplayError>
    where
        I: Iterator<Item = u8>,
    {
        let invert = self.invert;
        let mut bytes = bytes.map(move |b| b ^ invert);
        self.interface.send_data(DataFormat::U8Iter(&mut bytes))
    }

    /// Stream `count` blank bytes (the invert byte itself).
    fn write_blank(&mut self, count: usize) -> Result<(), DisplayError> {
        self.write_data(core::iter::repeat(0x00).take(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Bus mock that records every transmission.
    #[derive(Default)]
    struct RecordingBus {
        commands: Vec<Vec<u8>>,
        data: Vec<Vec<u8>>,
    }

    impl RecordingBus {
        fn collect(buf: DataFormat<'_>) -> Vec<u8> {
            match buf {
                DataFormat::U8(bytes) => bytes.to_vec(),
                DataFormat::U8Iter(iter) => iter.collect(),
                _ => panic!("unexpected data format"),
            }
        }

        fn data_bytes(&self) -> usize {
            self.data.iter().map(Vec::len).sum()
        }

        fn is_silent(&self) -> bool {
            self.commands.is_empty() && self.data.is_empty()
        }
    }

    impl WriteOnlyDataCommand for RecordingBus {
        fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
            let bytes = Self::collect(cmd);
            self.commands.push(bytes);
            Ok(())
        }

        fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
            let bytes = Self::collect(buf);
            self.data.push(bytes);
            Ok(())
        }
    }

    fn display() -> Ssd1306Xled<RecordingBus> {
        Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64)
    }

    /// Pages addressed via PageStart commands, in order of issue.
    fn pages_addressed(bus: &RecordingBus) -> Vec<u8> {
        bus.commands
            .iter()
            .filter(|c| c.len() == 1 && c[0] & 0xF8 == 0xB0)
            .map(|c| c[0] & 0x07)
            .collect()
    }

    #[test]
    fn init_starts_asleep_and_ends_awake() {
        let mut display = display();
        display.init().unwrap();
        let bus = display.release();
        assert_eq!(bus.commands.first().unwrap().as_slice(), [0xAE]);
        assert_eq!(bus.commands.last().unwrap().as_slice(), [0xAF]);
        assert!(bus.data.is_empty());
    }

    #[test]
    fn fill_covers_every_page() {
        let mut display =
            Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x32);
        display.fill(0xAA).unwrap();
        let bus = display.release();
        assert_eq!(bus.data_bytes(), 4 * 128);
        assert!(bus.data[0].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn clear_writes_blank_bytes() {
        let mut display = display();
        display.clear().unwrap();
        let bus = display.release();
        assert_eq!(bus.data_bytes(), 8 * 128);
        assert!(bus.data[0].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn negative_mode_flips_subsequent_writes_only() {
        let mut display = display();
        display.fill(0x00).unwrap();
        display.negative_mode();
        display.fill(0x00).unwrap();
        display.positive_mode();
        display.fill(0x00).unwrap();
        let bus = display.release();
        assert!(bus.data[0].iter().all(|&b| b == 0x00));
        assert!(bus.data[1].iter().all(|&b| b == 0xFF));
        assert!(bus.data[2].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn put_pixel_sets_one_bit_in_its_page() {
        let mut display = display();
        display.put_pixel(5, 11).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.last().unwrap().as_slice(), [1 << 3]);
        assert_eq!(pages_addressed(&bus).last(), Some(&1));
    }

    #[test]
    fn draw_bitmap_streams_window_bytes() {
        let mut display = display();
        let data: Vec<u8> = (0u8..32).collect();
        display.draw_bitmap(10, 2, 16, 16, &data).unwrap();
        let bus = display.release();
        assert_eq!(bus.data_bytes(), 32);
        assert_eq!(bus.data[0], data);
        // Window commands: column window 10..=25.
        assert_eq!(bus.commands[0].as_slice(), [0x21, 10, 25]);
    }

    #[test]
    fn clear_block_blanks_window() {
        let mut display = display();
        display.clear_block(4, 1, 20, 16).unwrap();
        let bus = display.release();
        assert_eq!(bus.data_bytes(), 40);
        assert!(bus.data.iter().flatten().all(|&b| b == 0x00));
    }

    #[test]
    fn draw_text_space_is_blank_columns() {
        let mut display = display();
        display.draw_text(0, 0, "  ", FontStyle::Normal).unwrap();
        let bus = display.release();
        assert_eq!(bus.data[0].len(), 12);
        assert!(bus.data[0].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn draw_text_bold_ors_adjacent_columns() {
        // Bold '!' keeps the 0x5F stroke and duplicates it one column right.
        let mut display = display();
        display.draw_text(0, 0, "!", FontStyle::Bold).unwrap();
        let bus = display.release();
        let cols = &bus.data[0];
        assert_eq!(cols.len(), 6);
        assert_eq!(cols[3], 0x5F);
        assert_eq!(cols[4], 0x5F);
    }

    #[test]
    fn draw_sprite_splits_columns_across_pages() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 2);
        assert!(bus.data[0].iter().all(|&b| b == 0xF8));
        assert!(bus.data[1].iter().all(|&b| b == 0x07));
        assert_eq!(pages_addressed(&bus), [0, 1]);
    }

    #[test]
    fn draw_sprite_page_aligned_touches_one_page() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 16, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 1);
        assert!(bus.data[0].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn draw_sprite_skips_pages_below_panel() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 27, 8, &data);
        let mut display =
            Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x32);
        display.draw_sprite(&mut sprite).unwrap();
        let bus = display.release();
        // Page 3 is the last one on a 32-row panel; the spill into page 4
        // is dropped.
        assert_eq!(bus.data.len(), 1);
        assert_eq!(pages_addressed(&bus), [3]);
    }

    #[test]
    fn draw_sprite_records_last_position() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(42, 17);
        display.draw_sprite(&mut sprite).unwrap();
        assert_eq!(sprite.last_pos(), (42, 17));
    }

    #[test]
    fn erase_sprite_blanks_both_pages() {
        let data = [0xFF; 8];
        let sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.erase_sprite(&sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 2);
        assert!(bus.data.iter().flatten().all(|&b| b == 0x00));
        assert_eq!(bus.data[0].len(), 8);
    }

    #[test]
    fn erase_trace_unmoved_sprite_is_silent() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        assert!(display.release().is_silent());
    }

    #[test]
    fn erase_trace_down_move_erases_only_vacated_page() {
        // (10, 3) → (10, 11): old pages 0..=1, new top page 1, so only
        // page 0 is blanked, 8 columns wide.
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(10, 11);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 1);
        assert_eq!(bus.data[0].len(), 8);
        assert_eq!(pages_addressed(&bus), [0]);
    }

    #[test]
    fn erase_trace_vertical_only_has_no_horizontal_pass() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 8, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(10, 16);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        let bus = display.release();
        // One stale page, full sprite width, nothing else.
        assert_eq!(bus.data.len(), 1);
        assert_eq!(bus.data[0].len(), 8);
    }

    #[test]
    fn erase_trace_down_within_top_page_is_silent() {
        // The redraw rewrites both straddled pages with zero-padded bytes,
        // so nothing is stale.
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(10, 5);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        assert!(display.release().is_silent());
    }

    #[test]
    fn erase_trace_left_move_blanks_old_right_strip() {
        // (20, 0) → (14, 0), w=8: vertical pass blanks old page 0 at full
        // width, horizontal pass blanks columns 22..=27 in the same page.
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(20, 0, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(14, 0);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 2);
        assert_eq!(bus.data[0].len(), 8);
        assert_eq!(bus.data[1].len(), 6);
    }

    #[test]
    fn erase_trace_right_move_blanks_old_left_strip() {
        // (10, 3) → (14, 3), w=8: old pages 0..=1. Vertical pass blanks the
        // old bottom page at full width; horizontal pass blanks columns
        // 10..=13 in both old pages.
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 3, 8, &data);
        let mut display = display();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(14, 3);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.erase_trace(&sprite).unwrap();
        let bus = display.release();
        assert_eq!(bus.data.len(), 3);
        assert_eq!(bus.data[0].len(), 8);
        assert_eq!(bus.data[1].len(), 4);
        assert_eq!(bus.data[2].len(), 4);
        assert_eq!(pages_addressed(&bus), [1, 0, 1]);
    }

    #[test]
    fn erase_trace_in_negative_mode_blanks_with_ones() {
        let data = [0xFF; 8];
        let mut sprite = Sprite::new(10, 0, 8, &data);
        let mut display = display();
        display.negative_mode();
        display.draw_sprite(&mut sprite).unwrap();
        sprite.move_to(10, 8);
        let mut display = Ssd1306Xled::new(RecordingBus::default(), DisplaySize::Size128x64);
        display.negative_mode();
        display.erase_trace(&sprite).unwrap();
        let bus = display.release();
        assert!(bus.data.iter().flatten().all(|&b| b == 0xFF));
    }
}
