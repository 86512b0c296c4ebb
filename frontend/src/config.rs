use log::Level;

pub const SITE_NAME: &str = "Open Artist Bank";

/// Fake latency for the invitation redemption, in milliseconds.
pub const REDEEM_DELAY_MS: u32 = 2_000;

pub const INVESTMENT_MIN: u32 = 10;
pub const INVESTMENT_MAX: u32 = 100;
pub const INVESTMENT_DEFAULT: u32 = 50;
pub const RETURN_MULTIPLIER: u32 = 2;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_bounds_are_ordered() {
        assert!(INVESTMENT_MIN < INVESTMENT_MAX);
        assert!((INVESTMENT_MIN..=INVESTMENT_MAX).contains(&INVESTMENT_DEFAULT));
    }

    #[test]
    fn redemption_waits_two_seconds() {
        assert_eq!(REDEEM_DELAY_MS, 2_000);
    }

    #[test]
    fn debug_builds_log_verbosely() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
