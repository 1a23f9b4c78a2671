// Grove I2C Motor Driver v1.3 wire protocol
//
// Every command is a single 3-byte I2C write:
// [header, payload, payload-or-padding]
//
// The board processes one command at a time and needs a short pause after
// each write before it accepts the next one (see config::COMMAND_DELAY_US).

/// Padding byte for commands whose payload is a single byte
const PADDING: u8 = 0x00;

/// Command headers understood by the board
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum CommandHeader {
    MotorSpeedSet = 0x82,
    PwmFrequencySet = 0x84,
    DirectionSet = 0xaa,
}

/// DC motor positions on one board
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    Motor1 = 1,
    Motor2 = 2,
}

/// Rotation sense of a single motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

/// Joint direction codes for the two motors sharing a board
///
/// The board has no per-motor direction command: both rotation senses are
/// always committed together in one byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionCode {
    BothClockwise = 0x0a,
    BothAnticlockwise = 0x05,
    /// Motor 1 clockwise, motor 2 anticlockwise
    M1CwM2Acw = 0x06,
    /// Motor 1 anticlockwise, motor 2 clockwise
    M1AcwM2Cw = 0x09,
}

/// PWM switching frequency presets
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    F31372Hz = 0x01,
    F3921Hz = 0x02,
    F490Hz = 0x03,
    F122Hz = 0x04,
    F30Hz = 0x05,
}

impl Default for Frequency {
    /// The board powers up expecting ~3.9kHz
    fn default() -> Self {
        Frequency::F3921Hz
    }
}

/// Compute the joint direction code for a board
///
/// Returns `None` until both motors have a committed rotation sense; the
/// board is never sent a direction byte for a half-known pair.
pub fn joint_direction(
    motor1: Option<Rotation>,
    motor2: Option<Rotation>,
) -> Option<DirectionCode> {
    let code = match (motor1?, motor2?) {
        (Rotation::Clockwise, Rotation::Clockwise) => DirectionCode::BothClockwise,
        (Rotation::Clockwise, Rotation::Anticlockwise) => DirectionCode::M1CwM2Acw,
        (Rotation::Anticlockwise, Rotation::Clockwise) => DirectionCode::M1AcwM2Cw,
        (Rotation::Anticlockwise, Rotation::Anticlockwise) => DirectionCode::BothAnticlockwise,
    };
    Some(code)
}

/// Convert a signed speed percentage to a rotation sense and PWM duty byte
///
/// The percentage is clamped to [-100, 100]; the sign picks the rotation
/// (zero counts as clockwise) and the magnitude maps linearly onto 0..=255.
pub fn duty_from_percent(percent: i8) -> (Rotation, u8) {
    let clamped = percent.clamp(-100, 100);
    let rotation = if clamped < 0 {
        Rotation::Anticlockwise
    } else {
        Rotation::Clockwise
    };
    // Rounded integer mapping of 0..=100 onto 0..=255
    let magnitude = clamped.unsigned_abs() as u16;
    let duty = ((magnitude * 255 + 50) / 100) as u8;
    (rotation, duty)
}

/// Frame committing both motors' rotation senses
pub fn direction_frame(code: DirectionCode) -> [u8; 3] {
    [CommandHeader::DirectionSet as u8, code as u8, PADDING]
}

/// Frame carrying both motors' duty bytes
pub fn speed_frame(duty1: u8, duty2: u8) -> [u8; 3] {
    [CommandHeader::MotorSpeedSet as u8, duty1, duty2]
}

/// Frame selecting a PWM frequency preset
pub fn frequency_frame(frequency: Frequency) -> [u8; 3] {
    [CommandHeader::PwmFrequencySet as u8, frequency as u8, PADDING]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_endpoints() {
        assert_eq!(duty_from_percent(0), (Rotation::Clockwise, 0));
        assert_eq!(duty_from_percent(100), (Rotation::Clockwise, 255));
        assert_eq!(duty_from_percent(-100), (Rotation::Anticlockwise, 255));
    }

    #[test]
    fn test_duty_rounds_linearly() {
        // 50% of 255 is 127.5, which rounds up
        assert_eq!(duty_from_percent(50), (Rotation::Clockwise, 128));
        assert_eq!(duty_from_percent(-50), (Rotation::Anticlockwise, 128));
        assert_eq!(duty_from_percent(1), (Rotation::Clockwise, 3));
    }

    #[test]
    fn test_duty_matches_rounded_mapping_over_full_range() {
        for percent in -100..=100i8 {
            let (rotation, duty) = duty_from_percent(percent);
            let expected = (percent.unsigned_abs() as f64 * 255.0 / 100.0).round() as u8;
            assert_eq!(duty, expected, "percent {}", percent);
            let expected_rotation = if percent < 0 {
                Rotation::Anticlockwise
            } else {
                Rotation::Clockwise
            };
            assert_eq!(rotation, expected_rotation, "percent {}", percent);
        }
    }

    #[test]
    fn test_duty_clamps_out_of_range() {
        assert_eq!(duty_from_percent(127), (Rotation::Clockwise, 255));
        assert_eq!(duty_from_percent(-128), (Rotation::Anticlockwise, 255));
    }

    #[test]
    fn test_joint_direction_covers_all_sign_pairs() {
        use Rotation::{Anticlockwise as Acw, Clockwise as Cw};

        assert_eq!(
            joint_direction(Some(Cw), Some(Cw)),
            Some(DirectionCode::BothClockwise)
        );
        assert_eq!(
            joint_direction(Some(Cw), Some(Acw)),
            Some(DirectionCode::M1CwM2Acw)
        );
        assert_eq!(
            joint_direction(Some(Acw), Some(Cw)),
            Some(DirectionCode::M1AcwM2Cw)
        );
        assert_eq!(
            joint_direction(Some(Acw), Some(Acw)),
            Some(DirectionCode::BothAnticlockwise)
        );
    }

    #[test]
    fn test_joint_direction_needs_both_motors() {
        assert_eq!(joint_direction(None, None), None);
        assert_eq!(joint_direction(Some(Rotation::Clockwise), None), None);
        assert_eq!(joint_direction(None, Some(Rotation::Anticlockwise)), None);
    }

    #[test]
    fn test_frame_encoding() {
        assert_eq!(
            direction_frame(DirectionCode::M1CwM2Acw),
            [0xaa, 0x06, 0x00]
        );
        assert_eq!(speed_frame(204, 128), [0x82, 204, 128]);
        assert_eq!(frequency_frame(Frequency::F3921Hz), [0x84, 0x02, 0x00]);
        assert_eq!(frequency_frame(Frequency::F30Hz), [0x84, 0x05, 0x00]);
    }
}
