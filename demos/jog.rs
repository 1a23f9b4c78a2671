// Jog test: spin both motors of one board through a short speed sweep.
//
// CAUTION: this WILL move the motors. Make sure they can spin freely.
//
// Usage: cargo run --example jog -- --device /dev/i2c-1 --address 15

use clap::Parser;
use grove_motor_driver::{Motor, MotorDriver};
use linux_embedded_hal::{Delay, I2cdev};
use std::thread::sleep;
use std::time::Duration;

/// Spin both motors of a Grove motor board through a short speed sweep
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// I2C device to open
    #[arg(short, long, default_value = "/dev/i2c-1")]
    device: String,

    /// Bus address set on the board's DIP switch (0x00 to 0x0f)
    #[arg(short, long, default_value_t = grove_motor_driver::config::DEFAULT_BUS_ADDRESS)]
    address: u8,

    /// Board slot to initialize (0 or 1)
    #[arg(short, long, default_value_t = 0)]
    board: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    println!("Opening {}...", args.device);
    let i2c = I2cdev::new(&args.device)?;
    let mut driver = MotorDriver::new(i2c, Delay);

    driver.begin(args.board, args.address)?;
    println!("Board {} ready at 0x{:02x}", args.board, args.address);

    // Sweep both motors: slow forward, faster, reverse, stop
    let steps: [i8; 4] = [25, 60, -40, 0];
    for percent in steps {
        println!("  Motors -> {}%", percent);
        driver.set_speed(args.board, Motor::Motor1, percent)?;
        driver.set_speed(args.board, Motor::Motor2, percent)?;
        sleep(Duration::from_millis(800));
    }

    driver.stop(args.board, Motor::Motor1)?;
    driver.stop(args.board, Motor::Motor2)?;
    println!("Motors stopped.");

    Ok(())
}
