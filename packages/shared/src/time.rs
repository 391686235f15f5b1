//! Time helpers used by log output.

use chrono::{DateTime, Local, SecondsFormat};

/// Current local time formatted as RFC 3339 with millisecond precision.
pub fn now_local_rfc3339() -> String {
    to_rfc3339_millis(Local::now())
}

fn to_rfc3339_millis(time: DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_rfc3339_millis_has_millisecond_precision() {
        // テスト項目: ミリ秒精度の RFC 3339 文字列に変換される
        // given (前提条件):
        let time = Local.timestamp_millis_opt(1_672_498_800_123).unwrap();

        // when (操作):
        let formatted = to_rfc3339_millis(time);

        // then (期待する結果):
        assert!(formatted.contains(".123"));
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }

    #[test]
    fn test_now_local_rfc3339_is_parseable() {
        // テスト項目: 現在時刻の文字列が RFC 3339 としてパースできる
        // when (操作):
        let formatted = now_local_rfc3339();

        // then (期待する結果):
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }
}
