//! Logger setup backed by `tracing-subscriber`.

use std::fmt;

use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::time::now_local_rfc3339;

/// Timer that prints local time in RFC 3339.
#[derive(Debug, Clone, Copy, Default)]
struct LocalRfc3339Timer;

impl FormatTime for LocalRfc3339Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", now_local_rfc3339())
    }
}

/// Build the default filter directive for a binary.
///
/// Cargo binary names use `-`, tracing targets use `_`.
pub fn default_directive(crate_name: &str, level: &str) -> String {
    format!(
        "{}={level},tower_http={level}",
        crate_name.replace('-', "_")
    )
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Arguments
///
/// * `crate_name` - Name of the binary, usually `env!("CARGO_BIN_NAME")`
/// * `level` - Default level for the crate and `tower_http`
pub fn setup_logger(crate_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(crate_name, level)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalRfc3339Timer)
                .with_target(true)
                .with_ansi(true),
        )
        .try_init();

    if let Err(e) = result {
        tracing::warn!("Logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_replaces_hyphens() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // when (操作):
        let directive = default_directive("repodex-server", "debug");

        // then (期待する結果):
        assert_eq!(directive, "repodex_server=debug,tower_http=debug");
    }

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: 二重初期化してもパニックしない
        // when (操作):
        setup_logger("repodex-server", "info");
        setup_logger("repodex-server", "info");
    }
}
