//! QMI8658 6-axis IMU (I2C)
//!
//! Only the accelerometer is used. It runs at ±8 g with register address
//! auto-increment so one 6-byte burst read returns all three axes.
//!
//! # Registers
//!
//! - WHO_AM_I (0x00) reads 0x05
//! - CTRL1 (0x02) serial interface; bit 6 enables address auto-increment
//! - CTRL2 (0x03) accelerometer full scale (bits 6:4) and output rate (3:0)
//! - CTRL7 (0x08) sensor enables; bit 0 is the accelerometer
//! - AX_L (0x35) first of six little-endian axis bytes

use embedded_hal::i2c::I2c;
use reverie_core::traits::{Acceleration, Accelerometer, SensorError};

/// 7-bit address with SA0 high
pub const ADDRESS: u8 = 0x6B;

/// WHO_AM_I value
pub const CHIP_ID: u8 = 0x05;

/// Counts per g at ±8 g full scale
pub const LSB_PER_G: i32 = 4096;

/// QMI8658 register addresses
pub mod reg {
    /// Device identifier
    pub const WHO_AM_I: u8 = 0x00;
    /// Serial interface configuration
    pub const CTRL1: u8 = 0x02;
    /// Accelerometer configuration
    pub const CTRL2: u8 = 0x03;
    /// Sensor enables
    pub const CTRL7: u8 = 0x08;
    /// Accelerometer X low byte
    pub const AX_L: u8 = 0x35;
}

/// CTRL1: address auto-increment
const CTRL1_ADDR_AI: u8 = 0x40;
/// CTRL2: ±8 g, 250 Hz
const CTRL2_ACCEL_8G_250HZ: u8 = 0x25;
/// CTRL7: accelerometer on, gyroscope off
const CTRL7_ACCEL_ONLY: u8 = 0x01;

/// QMI8658 accelerometer
pub struct Qmi8658<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Qmi8658<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Check the chip ID and enable the accelerometer
    pub fn init(&mut self) -> Result<(), SensorError> {
        let id = self.read_register(reg::WHO_AM_I)?;
        if id != CHIP_ID {
            return Err(SensorError::NotDetected);
        }

        self.write_register(reg::CTRL1, CTRL1_ADDR_AI)?;
        self.write_register(reg::CTRL2, CTRL2_ACCEL_8G_250HZ)?;
        self.write_register(reg::CTRL7, CTRL7_ACCEL_ONLY)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Convert a raw axis reading to milli-g
    pub fn raw_to_mg(raw: i16) -> i32 {
        raw as i32 * 1000 / LSB_PER_G
    }

    fn read_register(&mut self, register: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(ADDRESS, &[register], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(ADDRESS, &[register, value])
            .map_err(|_| SensorError::Bus)
    }
}

impl<I2C: I2c> Accelerometer for Qmi8658<I2C> {
    fn read(&mut self) -> Result<Acceleration, SensorError> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(ADDRESS, &[reg::AX_L], &mut buf)
            .map_err(|_| SensorError::Bus)?;

        let axis = |i: usize| Self::raw_to_mg(i16::from_le_bytes([buf[i], buf[i + 1]]));
        Ok(Acceleration {
            x_mg: axis(0),
            y_mg: axis(2),
            z_mg: axis(4),
        })
    }
}
