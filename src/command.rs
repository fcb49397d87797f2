//! SSD1306 command encoding.
//!
//! Each [`Command`] renders to its raw datasheet byte sequence and is sent
//! over the bus as a single command transmission.

use display_interface::{DataFormat::U8, DisplayError, WriteOnlyDataCommand};

/// Commands understood by the SSD1306 controller.
///
/// Only the commands this driver actually issues are encoded; the controller
/// supports more (scrolling, fade-out) that a bufferless driver has no use
/// for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Column window for horizontal addressing, start and end inclusive.
    ColumnAddress(u8, u8),
    /// GDDRAM page start (0–7).
    PageStart(u8),
    /// GDDRAM column start (0–127), sent as the high/low nibble pair.
    ColumnStart(u8),
    /// Contrast level, 0x00–0xFF.
    Contrast(u8),
    /// Light every pixel regardless of RAM contents.
    AllOn(bool),
    /// Controller-level display inversion (0xA6/0xA7).
    Invert(bool),
    /// Display on (0xAF) / sleep (0xAE).
    DisplayOn(bool),
    /// Oscillator frequency (upper nibble) and divide ratio (lower nibble).
    DisplayClockDiv(u8, u8),
    /// Multiplex ratio, usually `height - 1`.
    Multiplex(u8),
    /// Vertical shift of the displayed image.
    DisplayOffset(u8),
    /// RAM row mapped to COM0, 0–63.
    StartLine(u8),
    /// Enable or disable the internal charge pump.
    ChargePump(bool),
    /// Memory addressing mode.
    AddressMode(AddrMode),
    /// Map column 127 (instead of column 0) to SEG0.
    SegmentRemap(bool),
    /// Scan COM outputs in reverse order (vertical flip).
    ReverseComDir(bool),
    /// COM pin layout: alternative configuration, left/right remap.
    ComPinConfig(bool, bool),
    /// Pre-charge period: phase 1 and phase 2, in clocks.
    PreChargePeriod(u8, u8),
    /// VCOMH deselect level.
    VcomhDeselect(VcomhLevel),
}

impl Command {
    /// Encode the command and send it over the interface.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        // Largest command is three bytes; unused tail is never sent.
        let (data, len) = match self {
            Command::ColumnAddress(start, end) => ([0x21, start, end], 3),
            Command::PageStart(page) => ([0xB0 | (page & 0x07), 0, 0], 1),
            Command::ColumnStart(col) => ([0x10 | (col >> 4), col & 0x0F, 0], 2),
            Command::Contrast(value) => ([0x81, value, 0], 2),
            Command::AllOn(on) => ([0xA4 | on as u8, 0, 0], 1),
            Command::Invert(inv) => ([0xA6 | inv as u8, 0, 0], 1),
            Command::DisplayOn(on) => ([0xAE | on as u8, 0, 0], 1),
            Command::DisplayClockDiv(freq, div) => ([0xD5, (freq << 4) | (div & 0x0F), 0], 2),
            Command::Multiplex(ratio) => ([0xA8, ratio, 0], 2),
            Command::DisplayOffset(offset) => ([0xD3, offset, 0], 2),
            Command::StartLine(line) => ([0x40 | (line & 0x3F), 0, 0], 1),
            Command::ChargePump(en) => ([0x8D, if en { 0x14 } else { 0x10 }, 0], 2),
            Command::AddressMode(mode) => ([0x20, mode as u8, 0], 2),
            Command::SegmentRemap(remap) => ([0xA0 | remap as u8, 0, 0], 1),
            Command::ReverseComDir(rev) => ([0xC0 | ((rev as u8) << 3), 0, 0], 1),
            Command::ComPinConfig(alt, lr) => {
                ([0xDA, 0x02 | ((alt as u8) << 4) | ((lr as u8) << 5), 0], 2)
            }
            Command::PreChargePeriod(phase1, phase2) => {
                ([0xD9, (phase2 << 4) | (phase1 & 0x0F), 0], 2)
            }
            Command::VcomhDeselect(level) => ([0xDB, (level as u8) << 4, 0], 2),
        };

        iface.send_commands(U8(&data[0..len]))
    }
}

/// Memory addressing mode (command 0x20).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// The column pointer wraps to the next page at the window edge.
    Horizontal = 0b00,
    /// The page pointer wraps to the next column at the window edge.
    Vertical = 0b01,
    /// The column pointer wraps within the current page.
    Page = 0b10,
}

/// VCOMH deselect level (command 0xDB).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VcomhLevel {
    /// 0.65 × Vcc
    V065 = 0b001,
    /// 0.77 × Vcc
    V077 = 0b010,
    /// 0.83 × Vcc
    V083 = 0b011,
    /// Auto
    Auto = 0b100,
}

#[cfg(test)]
mod tests {
    use super::*;
    use display_interface::DataFormat;
    use std::vec::Vec;

    struct CaptureBus(Vec<u8>);

    impl WriteOnlyDataCommand for CaptureBus {
        fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
            match cmd {
                DataFormat::U8(bytes) => self.0.extend_from_slice(bytes),
                _ => return Err(DisplayError::DataFormatNotImplemented),
            }
            Ok(())
        }

        fn send_data(&mut self, _buf: DataFormat<'_>) -> Result<(), DisplayError> {
            Err(DisplayError::DataFormatNotImplemented)
        }
    }

    fn encode(cmd: Command) -> Vec<u8> {
        let mut bus = CaptureBus(Vec::new());
        cmd.send(&mut bus).unwrap();
        bus.0
    }

    #[test]
    fn column_address_window() {
        assert_eq!(encode(Command::ColumnAddress(10, 17)), [0x21, 10, 17]);
    }

    #[test]
    fn page_start_masks_to_three_bits() {
        assert_eq!(encode(Command::PageStart(3)), [0xB3]);
        assert_eq!(encode(Command::PageStart(9)), [0xB1]);
    }

    #[test]
    fn column_start_splits_nibbles() {
        assert_eq!(encode(Command::ColumnStart(0x5A)), [0x15, 0x0A]);
    }

    #[test]
    fn display_on_off() {
        assert_eq!(encode(Command::DisplayOn(true)), [0xAF]);
        assert_eq!(encode(Command::DisplayOn(false)), [0xAE]);
    }

    #[test]
    fn invert_commands() {
        assert_eq!(encode(Command::Invert(false)), [0xA6]);
        assert_eq!(encode(Command::Invert(true)), [0xA7]);
    }

    #[test]
    fn charge_pump_values() {
        assert_eq!(encode(Command::ChargePump(true)), [0x8D, 0x14]);
        assert_eq!(encode(Command::ChargePump(false)), [0x8D, 0x10]);
    }

    #[test]
    fn com_pin_config_128x64() {
        assert_eq!(encode(Command::ComPinConfig(true, false)), [0xDA, 0x12]);
    }

    #[test]
    fn vcomh_auto() {
        assert_eq!(encode(Command::VcomhDeselect(VcomhLevel::Auto)), [0xDB, 0x40]);
    }
}
