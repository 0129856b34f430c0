//! PWM tone generation for the piezo buzzer

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

/// Square-wave tone source on one PWM channel
///
/// The slice is clock-independent: the divider is computed from clk_sys
/// so one counter tick is 1 us, and a tone of `f` Hz is a wrap every
/// 1_000_000 / f ticks at 50% duty.
pub struct Buzzer<'d> {
    pwm: Pwm<'d>,
    // Kept so reconfiguring the compare value does not reset the divider
    cfg: PwmConfig,
}

impl<'d> Buzzer<'d> {
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let clk = clk_sys_freq() as u64;
        let div = (clk / 1_000_000).clamp(1, 255) as u8;

        let mut cfg = PwmConfig::default();
        cfg.divider = div.into();
        cfg.phase_correct = false;
        cfg.compare_a = 0;
        cfg.enable = true;
        pwm.set_config(&cfg);

        Self { pwm, cfg }
    }

    /// Start a continuous tone at `freq_hz`
    pub fn tone(&mut self, freq_hz: u32) {
        let period_us = (1_000_000 / freq_hz.max(16)).clamp(2, 65_535) as u16;
        self.cfg.top = period_us - 1;
        self.cfg.compare_a = period_us / 2;
        self.pwm.set_config(&self.cfg);
    }

    /// Stop the tone, leaving the pin low
    pub fn silence(&mut self) {
        self.cfg.compare_a = 0;
        self.pwm.set_config(&self.cfg);
    }
}
