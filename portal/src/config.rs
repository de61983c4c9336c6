use std::time::Duration;

pub const DEFAULT_NAVIGATE_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// Cosmetic delays applied by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause between a successful submission and leaving the page.
    pub navigate_delay: Duration,
    /// How long transient notices (e.g. "OTP resent") stay visible.
    pub notice_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            navigate_delay: DEFAULT_NAVIGATE_DELAY,
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
        }
    }
}

impl Timings {
    /// Timings overridden at build time through `NAVIGATE_DELAY_MS` and
    /// `NOTICE_TIMEOUT_MS`.
    pub fn from_build_env() -> Self {
        Self {
            navigate_delay: millis_or(
                option_env!("NAVIGATE_DELAY_MS"),
                DEFAULT_NAVIGATE_DELAY,
            ),
            notice_timeout: millis_or(
                option_env!("NOTICE_TIMEOUT_MS"),
                DEFAULT_NOTICE_TIMEOUT,
            ),
        }
    }

    /// No delays at all, handy in tests.
    pub fn immediate() -> Self {
        Self {
            navigate_delay: Duration::ZERO,
            notice_timeout: Duration::ZERO,
        }
    }
}

fn millis_or(value: Option<&str>, default: Duration) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
