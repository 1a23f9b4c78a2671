// High-level driver for the Grove I2C Motor Driver v1.3
//
// Owns the bus handle and the bookkeeping for up to two boards: each board's
// bus address plus the last commanded (rotation, duty) pair of its two motors.
// The board couples its motors' directions into one joint command byte, so
// setting one motor's speed re-commits the sibling's direction as well.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use tracing::{debug, info};

use crate::config::{BOARD_COUNT, BUS_SETTLE_DELAY_US, COMMAND_DELAY_US, MAX_BUS_ADDRESS};
use crate::protocol::{self, Frequency, Motor, Rotation};

/// Error types for driver operations
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error("board index {0} out of range (must be 0 or 1)")]
    BoardIndex(u8),

    #[error("bus address 0x{0:02x} out of range (must be 0x00 to 0x0f)")]
    BusAddress(u8),

    #[error("board {0} has not been initialized")]
    NotInitialized(u8),

    #[error("i2c bus error: {0:?}")]
    Bus(E),
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// Last commanded state of one motor slot
#[derive(Debug, Clone, Copy, Default)]
struct MotorState {
    rotation: Option<Rotation>,
    duty: u8,
}

/// One controller board: its bus address and its two motor slots
#[derive(Debug, Clone, Copy)]
struct BoardState {
    address: u8,
    motor1: MotorState,
    motor2: MotorState,
}

impl BoardState {
    fn new(address: u8) -> Self {
        Self {
            address,
            motor1: MotorState::default(),
            motor2: MotorState::default(),
        }
    }

    fn motor(&self, motor: Motor) -> &MotorState {
        match motor {
            Motor::Motor1 => &self.motor1,
            Motor::Motor2 => &self.motor2,
        }
    }

    fn motor_mut(&mut self, motor: Motor) -> &mut MotorState {
        match motor {
            Motor::Motor1 => &mut self.motor1,
            Motor::Motor2 => &mut self.motor2,
        }
    }
}

/// Driver for up to two Grove motor boards sharing one I2C bus
///
/// The bus is a physical singleton, so one driver value owns the handle for
/// all boards it talks to. There is no internal locking; the driver expects a
/// single calling thread, which is the usual shape of a control loop.
pub struct MotorDriver<I2C, D> {
    i2c: I2C,
    delay: D,
    boards: [Option<BoardState>; BOARD_COUNT],
}

impl<I2C, D> MotorDriver<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver over an already-opened bus handle
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            boards: [None; BOARD_COUNT],
        }
    }

    /// Initialize one board slot
    ///
    /// Validates `board` (0 or 1) and `address` (the board's 4-bit DIP switch
    /// value), waits for the bus to settle, then configures the board with
    /// the default ~3.9kHz PWM preset. On a validation error nothing is
    /// stored and nothing is transmitted. Calling `begin` again only updates
    /// the stored address; the motors' commanded state persists, since the
    /// physical motors are still running with it.
    pub fn begin(&mut self, board: u8, address: u8) -> Result<(), I2C::Error> {
        let slot = board_slot(board)?;
        if address > MAX_BUS_ADDRESS {
            return Err(Error::BusAddress(address));
        }

        info!("Initializing board {} at bus address 0x{:02x}", board, address);
        self.delay.delay_us(BUS_SETTLE_DELAY_US);

        match &mut self.boards[slot] {
            Some(state) => state.address = address,
            None => self.boards[slot] = Some(BoardState::new(address)),
        }
        self.set_frequency(board, Frequency::default())
    }

    /// Set the speed of one motor
    ///
    /// `percent` is clamped to [-100, 100]; the sign picks the rotation sense
    /// (zero counts as clockwise) and the magnitude maps onto the PWM duty
    /// byte. Once both motors on the board have a known rotation, a joint
    /// direction frame is sent before the speed frame; the speed frame always
    /// carries both motors' stored duties.
    pub fn set_speed(&mut self, board: u8, motor: Motor, percent: i8) -> Result<(), I2C::Error> {
        let slot = board_slot(board)?;
        let state = self.boards[slot]
            .as_mut()
            .ok_or(Error::NotInitialized(board))?;

        let (rotation, duty) = protocol::duty_from_percent(percent);
        let target = state.motor_mut(motor);
        target.rotation = Some(rotation);
        target.duty = duty;

        let address = state.address;
        let code = protocol::joint_direction(state.motor1.rotation, state.motor2.rotation);
        let (duty1, duty2) = (state.motor1.duty, state.motor2.duty);

        debug!(
            "Board {} {:?}: {}% -> {:?} duty {}",
            board, motor, percent, rotation, duty
        );

        if let Some(code) = code {
            self.transmit(address, protocol::direction_frame(code))?;
        }
        self.transmit(address, protocol::speed_frame(duty1, duty2))
    }

    /// Stop one motor (zero duty)
    ///
    /// The sibling motor's duty is untouched, but its direction byte is
    /// re-committed as part of the joint direction frame.
    pub fn stop(&mut self, board: u8, motor: Motor) -> Result<(), I2C::Error> {
        self.set_speed(board, motor, 0)
    }

    /// Select one of the board's PWM frequency presets
    pub fn set_frequency(&mut self, board: u8, frequency: Frequency) -> Result<(), I2C::Error> {
        let slot = board_slot(board)?;
        let address = self.boards[slot]
            .as_ref()
            .ok_or(Error::NotInitialized(board))?
            .address;

        debug!("Board {} PWM frequency {:?}", board, frequency);
        self.transmit(address, protocol::frequency_frame(frequency))
    }

    /// Bus address stored for a board, if `begin` has run for it
    pub fn address(&self, board: u8) -> Option<u8> {
        self.board(board).map(|state| state.address)
    }

    /// Last commanded duty byte of a motor
    pub fn commanded_duty(&self, board: u8, motor: Motor) -> Option<u8> {
        self.board(board).map(|state| state.motor(motor).duty)
    }

    /// Last commanded rotation sense of a motor, if one has been set
    pub fn commanded_rotation(&self, board: u8, motor: Motor) -> Option<Rotation> {
        self.board(board).and_then(|state| state.motor(motor).rotation)
    }

    /// Hand the bus handle and delay provider back to the caller
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn board(&self, board: u8) -> Option<&BoardState> {
        self.boards.get(board as usize)?.as_ref()
    }

    /// Write one 3-byte frame, then hold off for the board's latch time
    fn transmit(&mut self, address: u8, frame: [u8; 3]) -> Result<(), I2C::Error> {
        self.i2c.write(address, &frame).map_err(Error::Bus)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }
}

fn board_slot<E>(board: u8) -> Result<usize, E> {
    let slot = board as usize;
    if slot >= BOARD_COUNT {
        return Err(Error::BoardIndex(board));
    }
    Ok(slot)
}
