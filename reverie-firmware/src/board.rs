//! Pin mapping for the RP2040 round-LCD watch board
//!
//! | Function  | Pin  | Peripheral        |
//! |-----------|------|-------------------|
//! | Primary   | GP15 | input, pull-up    |
//! | Secondary | GP16 | input, pull-up    |
//! | Power     | GP17 | input, pull-up    |
//! | Piezo     | GP14 | PWM slice 7 A     |
//! | Backlight | GP25 | PWM slice 4 B     |
//! | IMU SDA   | GP6  | I2C1              |
//! | IMU SCL   | GP7  | I2C1              |

use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::rtc::Rtc;
use embassy_rp::Peripherals;

use reverie_drivers::input::{ButtonConfig, ButtonPanel};
use reverie_drivers::motion::{DeltaTracker, Qmi8658};
use reverie_hal_rp2040::backlight::PwmBacklight;
use reverie_hal_rp2040::clock::RtcClock;
use reverie_hal_rp2040::flash::Rp2040FlashStorage;
use reverie_hal_rp2040::gpio::ButtonPin;
use reverie_hal_rp2040::tone::PwmTone;

use crate::display::ScreenSink;

/// IMU bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

pub type Imu = Qmi8658<I2c<'static, I2C1, i2c::Blocking>>;

/// Board peripherals, configured but not yet handed to tasks
pub struct Board {
    pub storage: Rp2040FlashStorage<'static>,
    pub clock: RtcClock<'static>,
    pub buttons: ButtonPanel<ButtonPin<'static>>,
    pub imu: Imu,
    pub screen: ScreenSink<'static>,
    pub tone: PwmTone<'static>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        let buttons = ButtonPanel::new(
            ButtonPin::pull_up(p.PIN_15),
            ButtonPin::pull_up(p.PIN_16),
            ButtonPin::pull_up(p.PIN_17),
            ButtonConfig::default(),
        );

        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = I2C_FREQUENCY_HZ;
        let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config);

        let piezo = Pwm::new_output_a(p.PWM_SLICE7, p.PIN_14, pwm::Config::default());
        let backlight = Pwm::new_output_b(p.PWM_SLICE4, p.PIN_25, pwm::Config::default());

        Self {
            storage: Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0),
            clock: RtcClock::new(Rtc::new(p.RTC)),
            buttons,
            imu: Qmi8658::new(i2c),
            screen: ScreenSink::new(PwmBacklight::new(backlight)),
            tone: PwmTone::new(piezo),
        }
    }
}

/// Controller collaborators for this board
pub type BoardIo = reverie_core::controller::Io<
    RtcClock<'static>,
    ButtonPanel<ButtonPin<'static>>,
    DeltaTracker<Imu>,
    ScreenSink<'static>,
    PwmTone<'static>,
>;
