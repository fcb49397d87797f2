//! Bufferless SSD1306 OLED driver with sprite drawing and minimal-redraw
//! trace erase.
//!
//! This crate drives 128×64 and 128×32 SSD1306-family panels without a
//! frame buffer: every primitive addresses a RAM window on the controller
//! and streams column bytes straight over the bus. That keeps RAM usage at
//! zero, which matters on the small microcontrollers these panels usually
//! hang off of.
//!
//! The interesting part is sprite movement. [`Sprite`] tracks where it was
//! last drawn, and [`Ssd1306Xled::erase_trace`] blanks only the 8-row pages
//! and column strips the old footprint still owns — never the region the
//! upcoming redraw covers — so a moving sprite updates without repainting
//! the screen and without erase/redraw flicker.
//!
//! # Quick start
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
//! let bitmap = [0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x7E, 0x3C, 0x18];
//! let mut sprite = Sprite::new(0, 0, 8, &bitmap);
//! loop {
//!     display.draw_sprite(&mut sprite)?;
//!     sprite.move_to(sprite.x + 1, sprite.y);
//!     display.erase_trace(&sprite)?;
//! }
//! # }
//! ```
//!
//! Any [`display_interface::WriteOnlyDataCommand`] implementation works as
//! the bus; [`I2CDisplayInterface`] wires up the common I2C case.
//!
//! # Crate features
//!
//! - **`defmt`** — `defmt::Format` implementations on the public value
//!   types.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod driver;
pub mod font;
pub mod size;
pub mod sprite;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use display_interface::DisplayError;
pub use driver::{I2CDisplayInterface, Ssd1306Xled};
pub use font::{Font6x8, FontStyle, FONT_6X8};
pub use size::DisplaySize;
pub use sprite::{Rect, Sprite};

/// Display width in pixels, fixed across the SSD1306 family.
pub const WIDTH: u8 = 128;
