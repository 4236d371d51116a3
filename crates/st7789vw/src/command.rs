// ST7789VW command definitions

// Initialization and reset
pub const SOFT_RESET: u8 = 0x01; // Software reset
pub const SLEEP_OUT: u8 = 0x11; // Sleep out
pub const DISPLAY_ON: u8 = 0x29; // Display on

// Orientation
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36; // MADCTL

// MADCTL parameter bits
pub const MADCTL_MY: u8 = 0x80; // Row address order
pub const MADCTL_MX: u8 = 0x40; // Column address order
pub const MADCTL_MV: u8 = 0x20; // Row/column exchange
