//! quasi-snake firmware for the nRF52840.
//!
//! One poll loop samples the joystick every `POLL_INTERVAL_MS`, feeds the
//! resolved gesture to the UI state machine and redraws the OLED. A second
//! future writes settings changes to flash in the background.

#![no_std]
#![no_main]

mod board;

use board::display::{self, LedGrid, TextGrid};
use board::io::{AxisSamples, ButtonInput, HwRandom, PwmDimmer, UptimeClock};
use board::storage::{self, FlashMirror};
use defmt::{info, warn};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::{bind_interrupts, peripherals, rng, saadc, twim};
use embassy_time::{Duration, Ticker};
use quasi_snake::config::{BUTTON_PIN, POLL_INTERVAL_MS};
use quasi_snake::hal::{Clock, Context};
use quasi_snake::joystick::JoystickPins;
use quasi_snake::{Joystick, UiStateMachine};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    RNG => rng::InterruptHandler<peripherals::RNG>;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("quasi-snake starting");

    // Joystick
    let mut button = ButtonInput::new(Input::new(p.P0_11, Pull::Up), BUTTON_PIN);
    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_10BIT;
    let mut saadc = saadc::Saadc::new(
        p.SAADC,
        Irqs,
        saadc_config,
        [
            saadc::ChannelConfig::single_ended(p.P0_03),
            saadc::ChannelConfig::single_ended(p.P0_04),
        ],
    );
    saadc.calibrate().await;

    // Outputs
    let mut dimmer = PwmDimmer::new(SimplePwm::new_2ch(p.PWM0, p.P0_13, p.P0_14));
    let mut random = HwRandom::new(rng::Rng::new(p.RNG, Irqs));
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = display::init(i2c);
    let mut text = TextGrid::new();
    let mut leds = LedGrid::new();

    // Settings
    let mut flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let mut mirror = FlashMirror::load(&mut flash).await;

    let mut clock = UptimeClock;
    let now = clock.now_ms();
    let mut joystick = Joystick::init(&mut button, JoystickPins::default(), now);
    let mut ui = UiStateMachine::init(
        &mut Context {
            display: &mut text,
            matrix: &mut leds,
            storage: &mut mirror,
            random: &mut random,
            dimmer: &mut dimmer,
        },
        now,
    );
    info!("UI ready");

    let ui_loop = async {
        let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
        loop {
            let mut axes = AxisSamples::sample(&mut saadc).await;
            let now = clock.now_ms();
            let (press, dir) = joystick.poll(&mut button, &mut axes, now);

            ui.update(
                &mut Context {
                    display: &mut text,
                    matrix: &mut leds,
                    storage: &mut mirror,
                    random: &mut random,
                    dimmer: &mut dimmer,
                },
                now,
                press,
                dir,
            );

            if let Err(e) = display::render(&mut oled, &mut text, &mut leds) {
                warn!("Display: render failed: {}", e);
            }
            mirror.sync();

            ticker.next().await;
        }
    };

    join(ui_loop, storage::storage_task(flash)).await;
}
