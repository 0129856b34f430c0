//! Dodeka - Binary Ring Clock Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a DS1302
//! real-time clock over its bit-banged three-wire bus every half second
//! and renders hours, minutes and seconds as binary digits on a 12-pixel
//! WS2812 ring, with a once-a-day piezo alert.
//!
//! Named after the Greek "dodeka" meaning "twelve" - the pixel count of
//! the ring and the hours on a clock face.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use dodeka_drivers::{Ds1302, ThreeWireBus};
use dodeka_hal_rp2040::{BusyDelay, RpBidirPin, RpOutputPin};

mod buzzer;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dodeka firmware starting...");

    let p = embassy_rp::init(Default::default());

    // DS1302 on plain GPIO: chip-enable, clock, shared data line
    let bus = ThreeWireBus::new(
        RpOutputPin::new(p.PIN_2.into()),
        RpOutputPin::new(p.PIN_3.into()),
        RpBidirPin::new(p.PIN_4.into()),
        BusyDelay::new(),
    );
    let mut rtc = Ds1302::new(bus);

    rtc.initialize();
    if rtc.clock_halted() {
        warn!("oscillator halted: the time has never been set");
    }

    #[cfg(feature = "set-initial-time")]
    {
        info!("writing build-time initial time; reflash without `set-initial-time` next");
        rtc.set_time(config::INITIAL_TIME);
    }

    // WS2812 ring on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ring = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_6, &program);

    // Piezo buzzer on PWM channel 4A
    let buzzer = buzzer::Buzzer::new(Pwm::new_output_a(
        p.PWM_SLICE4,
        p.PIN_8,
        PwmConfig::default(),
    ));

    info!("Peripherals initialized");

    spawner.spawn(tasks::clock_task(rtc, ring, buzzer)).unwrap();
}
