// Board limits and timing for the Grove I2C Motor Driver v1.3

// Number of addressable boards (two DC motors each)
pub const BOARD_COUNT: usize = 2;

// The board's bus address is set with a 4-bit DIP switch
pub const MAX_BUS_ADDRESS: u8 = 0x0f;

// Factory DIP switch setting
pub const DEFAULT_BUS_ADDRESS: u8 = 0x0f;

// Pause before the first command so a freshly opened bus can settle, in microseconds
pub const BUS_SETTLE_DELAY_US: u32 = 10_000;

// Pause after every command frame, in microseconds. The board needs this
// long to latch a command; sending the next frame sooner corrupts it.
pub const COMMAND_DELAY_US: u32 = 4_000;
