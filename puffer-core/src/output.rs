//! PWM output sink
//!
//! Every tick produces one motor duty and one audio duty byte. Whatever
//! turns them into a waveform implements [`DutySink`].

use embedded_hal::pwm::SetDutyCycle;

/// Duty values produced by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyFrame {
    /// Motor duty (0 = stopped, 255 = full speed)
    pub motor: u8,
    /// Audio amplitude (0x80 = speaker at rest)
    pub audio: u8,
}

impl DutyFrame {
    /// Both outputs off
    pub const SILENT: Self = Self { motor: 0, audio: 0 };
}

/// Consumer of per-tick duty values
pub trait DutySink {
    type Error;

    /// Apply a frame to the outputs
    fn write(&mut self, frame: DutyFrame) -> Result<(), Self::Error>;
}

/// Motor and audio PWM channels
///
/// Duty bytes map onto the full range of each channel, so the channels may
/// use any counter top.
pub struct PwmOutputs<M, A> {
    motor: M,
    audio: A,
}

impl<M, A> PwmOutputs<M, A> {
    pub fn new(motor: M, audio: A) -> Self {
        Self { motor, audio }
    }
}

impl<M, A, E> DutySink for PwmOutputs<M, A>
where
    M: SetDutyCycle<Error = E>,
    A: SetDutyCycle<Error = E>,
{
    type Error = E;

    fn write(&mut self, frame: DutyFrame) -> Result<(), E> {
        self.motor
            .set_duty_cycle_fraction(frame.motor as u16, u8::MAX as u16)?;
        self.audio
            .set_duty_cycle_fraction(frame.audio as u16, u8::MAX as u16)
    }
}
