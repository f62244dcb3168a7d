//! Pacing parameter mapping.
//!
//! One control value in `[1, 100]` sets both the array length and the delay
//! between animation steps:
//! - 1 → 10 elements, 240 ms per step
//! - 100 → 80 elements, 3 ms per step
//!
//! Both maps are linear with round-half-up. Bigger arrays animate faster.

use std::time::Duration;

/// Lowest accepted pacing parameter.
pub const MIN_PARAMETER: u8 = 1;

/// Highest accepted pacing parameter.
pub const MAX_PARAMETER: u8 = 100;

/// Array length at the lowest parameter.
pub const MIN_LENGTH: usize = 10;

/// Array length at the highest parameter.
pub const MAX_LENGTH: usize = 80;

/// Step delay at the highest parameter.
pub const MIN_DELAY_MS: u64 = 3;

/// Step delay at the lowest parameter.
pub const MAX_DELAY_MS: u64 = 240;

const SPAN: u64 = (MAX_PARAMETER - MIN_PARAMETER) as u64;

/// Slider position, clamped to `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct PacingParameter(u8);

impl PacingParameter {
    /// Create a parameter, clamping out-of-range input.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_PARAMETER, MAX_PARAMETER))
    }

    /// The raw slider value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Array length for this parameter.
    pub fn length(&self) -> usize {
        let span = (MAX_LENGTH - MIN_LENGTH) as u64;
        MIN_LENGTH + scaled(self.offset(), span) as usize
    }

    /// Step delay in milliseconds for this parameter.
    pub fn delay_ms(&self) -> u64 {
        MAX_DELAY_MS - scaled(self.offset(), MAX_DELAY_MS - MIN_DELAY_MS)
    }

    /// Step delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    fn offset(&self) -> u64 {
        self.0.saturating_sub(MIN_PARAMETER) as u64
    }
}

impl Default for PacingParameter {
    fn default() -> Self {
        Self(50)
    }
}

impl From<u8> for PacingParameter {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<PacingParameter> for u8 {
    fn from(param: PacingParameter) -> Self {
        param.0
    }
}

/// `round(offset * range / SPAN)` in integer arithmetic.
const fn scaled(offset: u64, range: u64) -> u64 {
    (offset * range * 2 + SPAN) / (SPAN * 2)
}

/// Map a raw slider value to an array length.
pub fn pacing_parameter_to_length(param: u8) -> usize {
    PacingParameter::new(param).length()
}

/// Map a raw slider value to a step delay in milliseconds.
pub fn pacing_parameter_to_delay_ms(param: u8) -> u64 {
    PacingParameter::new(param).delay_ms()
}
