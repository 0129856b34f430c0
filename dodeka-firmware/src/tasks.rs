//! The clock task: poll the RTC, redraw the ring, sound the alert

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::{Ticker, Timer};

use dodeka_core::alarm::Alarm;
use dodeka_core::display;
use dodeka_drivers::Ds1302;
use dodeka_hal_rp2040::{BusyDelay, RpBidirPin, RpOutputPin};

use crate::buzzer::Buzzer;
use crate::config;

/// The one concrete RTC type this board wires up
pub type Rtc = Ds1302<RpOutputPin, RpOutputPin, RpBidirPin, BusyDelay>;
/// The WS2812 ring on PIO0 state machine 0
pub type Ring = PioWs2812<'static, PIO0, 0, { display::RING_LEN }>;

#[embassy_executor::task]
pub async fn clock_task(mut rtc: Rtc, mut ring: Ring, mut buzzer: Buzzer<'static>) {
    info!("clock task started");

    let mut alarm = Alarm::new(config::ALARM_HOUR, config::ALARM_MINUTE);
    let mut ticker = Ticker::every(config::POLL_INTERVAL);

    loop {
        let image = rtc.read_clock();
        if !image.plausible() {
            // A dead bus reads all zeros; render it anyway so the ring
            // stays visibly alive
            warn!("implausible clock readout");
        }

        let time = image.decode();
        if config::DUMP_TIME {
            info!("{=u8:02}:{=u8:02}:{=u8:02}", time.hour, time.minute, time.second);
        }

        ring.write(&display::render(time)).await;

        if alarm.update(time) {
            info!("alert: reached {=u8:02}:{=u8:02}", config::ALARM_HOUR, config::ALARM_MINUTE);
            buzzer.tone(config::TONE_HZ);
            Timer::after(config::TONE_LENGTH).await;
            buzzer.silence();
        }
        ticker.next().await;
    }
}
