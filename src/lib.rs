// Driver for the Grove I2C Motor Driver v1.3 dual DC motor board
//
// Provides:
// - 3-byte command frame encoding (direction, speed, PWM frequency)
// - Percentage speed to PWM duty conversion
// - High-level MotorDriver API addressing up to two boards on one bus
//
// The driver is generic over the embedded-hal I2c and DelayNs traits; the
// embedding supplies the concrete bus (e.g. linux-embedded-hal's I2cdev).

pub mod config;
pub mod driver;
pub mod protocol;

pub use driver::{Error, MotorDriver};
pub use protocol::{DirectionCode, Frequency, Motor, Rotation};
