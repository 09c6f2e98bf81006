use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::models::Provider;

/// True iff the provider is marked available right now. The flag is the
/// single source of truth; `next_available_at` is ignored when it is set.
pub fn is_available_now(provider: &Provider) -> bool {
    provider.is_available
}

/// Wait until the provider's next slot. Already-available providers wait
/// zero; a stale or skewed `next_available_at` in the past clamps to zero
/// instead of going negative.
pub fn time_until_available(provider: &Provider, now: DateTime<Utc>) -> Duration {
    if provider.is_available {
        return Duration::zero();
    }

    let wait = provider.next_available_at - now;
    if wait < Duration::zero() {
        Duration::zero()
    } else {
        wait
    }
}

/// Render a wait as "{h}h {m}m", or "{m}m" when under an hour. Whole
/// minutes only; sub-minute remainders are discarded, not rounded.
pub fn format_wait(wait: Duration) -> String {
    let total_minutes = wait.num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// The provider's fixed daily slot list for `date`, in declared order.
/// Deliberately unfiltered by booking state: what could be offered is this
/// resolver's answer, what is still free is the booking layer's.
pub fn offered_slots(provider: &Provider, date: NaiveDate) -> Vec<NaiveTime> {
    debug!(
        "offering {} daily slots for {} on {}",
        provider.offered_times.len(),
        provider.name,
        date
    );
    provider.offered_times.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::{ProviderDirectory, DR_PATEL_ID, DR_SHARMA_ID, DR_SINGH_ID};

    #[test]
    fn available_provider_waits_zero() {
        let now = Utc::now();
        let directory = ProviderDirectory::seeded(now);
        let sharma = directory.find(DR_SHARMA_ID).unwrap();

        assert!(is_available_now(sharma));
        assert_eq!(time_until_available(sharma, now), Duration::zero());
    }

    #[test]
    fn wait_is_never_negative() {
        let now = Utc::now();
        let directory = ProviderDirectory::seeded(now);
        let patel = directory.find(DR_PATEL_ID).unwrap();

        // Query long after the advertised slot has passed.
        let later = now + Duration::hours(6);
        assert_eq!(time_until_available(patel, later), Duration::zero());
    }

    #[test]
    fn wait_counts_down_to_the_next_slot() {
        let now = Utc::now();
        let directory = ProviderDirectory::seeded(now);
        let patel = directory.find(DR_PATEL_ID).unwrap();

        assert_eq!(
            time_until_available(patel, now),
            Duration::minutes(20)
        );
    }

    #[test]
    fn wait_renders_minutes_only_under_an_hour() {
        assert_eq!(format_wait(Duration::minutes(20)), "20m");
        assert_eq!(format_wait(Duration::zero()), "0m");
    }

    #[test]
    fn wait_renders_hours_and_remainder_minutes() {
        assert_eq!(format_wait(Duration::minutes(125)), "2h 5m");
        assert_eq!(format_wait(Duration::hours(11)), "11h 0m");
    }

    #[test]
    fn sub_minute_precision_is_discarded() {
        assert_eq!(format_wait(Duration::seconds(119)), "1m");
        assert_eq!(format_wait(Duration::seconds(59)), "0m");
    }

    #[test]
    fn offered_slots_are_the_declared_daily_list() {
        let now = Utc::now();
        let directory = ProviderDirectory::seeded(now);
        let singh = directory.find(DR_SINGH_ID).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

        let times: Vec<String> = offered_slots(singh, date)
            .iter()
            .map(|time| time.format("%H:%M").to_string())
            .collect();
        assert_eq!(times, vec!["09:30", "12:00", "16:00"]);
    }
}
