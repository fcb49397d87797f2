//! Supported display size variants.

use crate::command::Command;

/// Panel variants driven by this crate.
///
/// Width is fixed at 128 columns across the SSD1306 family; the variants
/// differ only in height and therefore in page count and COM wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplaySize {
    /// 128×64 panel, 8 pages.
    Size128x64,
    /// 128×32 panel, 4 pages.
    Size128x32,
}

impl DisplaySize {
    /// Width in pixels.
    pub const fn width(self) -> u8 {
        128
    }

    /// Height in pixels. Always a multiple of 8.
    pub const fn height(self) -> u8 {
        match self {
            DisplaySize::Size128x64 => 64,
            DisplaySize::Size128x32 => 32,
        }
    }

    /// Number of 8-row pages.
    pub const fn pages(self) -> u8 {
        self.height() >> 3
    }

    /// COM pin hardware configuration for this panel.
    pub(crate) const fn com_pin_config(self) -> Command {
        match self {
            DisplaySize::Size128x64 => Command::ComPinConfig(true, false),
            DisplaySize::Size128x32 => Command::ComPinConfig(false, false),
        }
    }

    /// Default contrast for this panel.
    pub(crate) const fn contrast(self) -> u8 {
        match self {
            DisplaySize::Size128x64 => 0xCF,
            DisplaySize::Size128x32 => 0x8F,
        }
    }
}
