use chrono::Duration;

pub mod character {
    use super::*;

    /// Stored character info is considered fresh for 1 day
    pub const CACHE_DURATION: Duration = Duration::hours(24);

    /// Maximum characters refreshed per run, keeps each owner's API key well under its rate limit
    pub const BATCH_LIMIT: u64 = 50;

    /// Cron expression for character info refresh
    /// Runs every 30 minutes (00:00, 00:30, 01:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 */30 * * * *";
}
