//! 时间工具函数 — 预订时长
//!
//! 所有时间都是 UTC；repository 层只接收 `DateTime<Utc>`。

use chrono::{DateTime, Duration, Utc};

/// 默认预订时长 (小时)：未指定 endTime 时使用
pub const DEFAULT_RESERVATION_HOURS: i64 = 2;

/// 计算默认结束时间 (startTime + 2h)
pub fn default_end_time(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::hours(DEFAULT_RESERVATION_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_end_time_adds_two_hours() {
        let start: DateTime<Utc> = "2026-10-03T20:30:00Z".parse().unwrap();
        let end = default_end_time(start);
        assert_eq!(end, "2026-10-03T22:30:00Z".parse::<DateTime<Utc>>().unwrap());
    }
}
