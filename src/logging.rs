//! ログ初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、なければ `warn`
//! （`--verbose` 指定時は `atl=debug`）で stderr に出力する。

use tracing_subscriber::EnvFilter;

/// フィルタ未指定時の既定値
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,atl=debug"
    } else {
        "warn"
    }
}

/// サブスクライバを初期化（2回目以降は何もしない）
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "warn,atl=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
