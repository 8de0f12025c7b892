use std::time::Duration;

/// Delays used when revealing a trail.
///
/// Pacing only affects presentation. The run being revealed is already
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause between consecutive records.
    pub record_delay: Duration,

    /// Pause between characters of a record.
    pub char_delay: Duration,

    /// Period of the "processing" dot animation.
    pub dots_period: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            record_delay: Duration::from_millis(500),
            char_delay: Duration::from_millis(5),
            dots_period: Duration::from_millis(400),
        }
    }
}

impl Pacing {
    /// No delays; the whole trail is shown at once.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            record_delay: Duration::ZERO,
            char_delay: Duration::ZERO,
            dots_period: Duration::ZERO,
        }
    }

    /// Builds pacing from millisecond values.
    #[must_use]
    pub fn from_millis(record_delay: u64, char_delay: u64, dots_period: u64) -> Self {
        Self {
            record_delay: Duration::from_millis(record_delay),
            char_delay: Duration::from_millis(char_delay),
            dots_period: Duration::from_millis(dots_period),
        }
    }

    /// Returns true if no delay is configured.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.record_delay.is_zero() && self.char_delay.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_paced() {
        let pacing = Pacing::default();
        assert_eq!(pacing, Pacing::from_millis(500, 5, 400));
        assert!(!pacing.is_instant());
    }

    #[test]
    fn instant_has_no_delays() {
        assert!(Pacing::instant().is_instant());
        assert!(Pacing::from_millis(0, 0, 400).is_instant());
    }
}
