use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Delay between submitting the form and the mutation being applied, in
/// milliseconds. The form shows a busy state for the whole window.
pub const SUBMIT_DELAY_MS: u64 = 300;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the submit delay duration
pub fn submit_delay() -> Duration {
    Duration::from_millis(SUBMIT_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_submit_delay() {
        assert_eq!(submit_delay(), Duration::from_millis(300));
    }
}
