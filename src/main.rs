//! Reflex Knob firmware - nRF52840 + SSD1306 + rotary encoder.
//!
//! Wires the board's peripherals into the game's ports, starts the encoder
//! task, and hands control to the game loop, which never returns.

#![no_std]
#![no_main]

mod ui;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::qdec::{self, Qdec};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals, rng};
use embassy_time::Delay;
use reflex_knob::input::{InputSampler, MoveResolver};
use reflex_knob::Game;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    QDEC => qdec::InterruptHandler<peripherals::QDEC>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("reflex-knob starting");

    // Display: SDA P0.26, SCL P0.27. Flushes block the executor, keep them short.
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let display = match ui::display::init(i2c) {
        Ok(display) => display,
        Err(e) => defmt::panic!("Display init failed: {}", e),
    };

    // Encoder: A P0.11, B P0.12, common to GND, decoded in hardware
    let mut qdec_config = qdec::Config::default();
    qdec_config.debounce = true;
    let qdec = Qdec::new(p.QDEC, Irqs, p.P0_11, p.P0_12, qdec_config);
    unwrap!(spawner.spawn(ui::knob::encoder_task(qdec)));

    // Button: P0.24 to GND
    let button = ui::buttons::PushButton::new(Input::new(p.P0_24, Pull::Up));

    let rng = rng::Rng::new(p.RNG, Irqs);

    let sampler = InputSampler::new(ui::knob::SharedEncoder, button);
    let input = MoveResolver::new(sampler, ui::Uptime, Delay);

    info!("Ready");
    Game::new(input, display, rng).run().await
}
