//! SSD1306 commands and the power-on sequence

use oledkit_core::DisplayConfig;

/// Control byte: the rest of the write is a command stream
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the rest of the write is display RAM data
pub const CONTROL_DATA: u8 = 0x40;

pub const MEMORY_MODE: u8 = 0x20;
pub const COLUMN_ADDR: u8 = 0x21;
pub const PAGE_ADDR: u8 = 0x22;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_CONTRAST: u8 = 0x81;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const SEG_REMAP: u8 = 0xA1;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Horizontal addressing mode
const HORIZONTAL_ADDRESSING: u8 = 0x00;
/// Internal charge pump on
const CHARGE_PUMP_ON: u8 = 0x14;
/// Sequential COM pin layout, used by 16 and 32 row panels
const COM_PINS_SEQUENTIAL: u8 = 0x02;
/// Alternative COM pin layout, used by everything else
const COM_PINS_ALTERNATIVE: u8 = 0x12;

/// Number of commands in [`init_sequence`]
pub const INIT_LEN: usize = 18;

/// One command with up to two parameter bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    bytes: [u8; 3],
    len: usize,
}

impl Command {
    /// Command without parameters
    pub const fn new(op: u8) -> Self {
        Self {
            bytes: [op, 0, 0],
            len: 1,
        }
    }

    /// Command with one parameter
    pub const fn with_arg(op: u8, arg: u8) -> Self {
        Self {
            bytes: [op, arg, 0],
            len: 2,
        }
    }

    /// Command with two parameters
    pub const fn with_args(op: u8, first: u8, second: u8) -> Self {
        Self {
            bytes: [op, first, second],
            len: 3,
        }
    }

    /// Opcode and parameters, without the control byte
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Bus payload: command control byte, opcode, parameters
    pub fn frame(&self) -> ([u8; 4], usize) {
        let mut frame = [CONTROL_COMMAND; 4];
        frame[1..=self.len].copy_from_slice(self.as_bytes());
        (frame, self.len + 1)
    }
}

/// Power-on configuration for a validated panel, in transmission order
pub fn init_sequence(config: &DisplayConfig) -> [Command; INIT_LEN] {
    let com_pins = match config.height {
        16 | 32 => COM_PINS_SEQUENTIAL,
        _ => COM_PINS_ALTERNATIVE,
    };

    [
        Command::new(DISPLAY_OFF),
        Command::with_arg(SET_CLOCK_DIV, 0x80),
        Command::with_arg(SET_MULTIPLEX, config.height - 1),
        Command::with_arg(SET_DISPLAY_OFFSET, 0x00),
        Command::new(SET_START_LINE),
        Command::with_arg(CHARGE_PUMP, CHARGE_PUMP_ON),
        Command::with_arg(MEMORY_MODE, HORIZONTAL_ADDRESSING),
        Command::new(SEG_REMAP),
        Command::new(COM_SCAN_DEC),
        Command::with_arg(SET_COM_PINS, com_pins),
        Command::with_arg(SET_CONTRAST, 0x8F),
        Command::with_arg(SET_PRECHARGE, 0xF1),
        Command::with_arg(SET_VCOM_DETECT, 0x40),
        Command::new(DISPLAY_ALL_ON_RESUME),
        Command::new(NORMAL_DISPLAY),
        Command::new(DISPLAY_ON),
        Command::with_args(COLUMN_ADDR, 0, config.width - 1),
        Command::with_args(PAGE_ADDR, 0, config.pages() as u8 - 1),
    ]
}
