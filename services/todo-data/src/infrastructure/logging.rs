/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// `RUST_LOG`未設定時のフィルター
///
/// AWS SDK内部（認証情報解決、HTTPリトライ）のログはwarn以上に絞る。
pub const DEFAULT_LOG_FILTER: &str =
    "info,aws_config=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

/// `RUST_LOG`または既定値からフィルターを構築する
fn build_env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式での構造化ログ出力を設定し、環境変数`RUST_LOG`または
/// `DEFAULT_LOG_FILTER`でフィルタリングを行う。
///
/// 複数回呼び出しても最初の呼び出しのみ初期化を実行する。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = build_env_filter(DEFAULT_LOG_FILTER);

        // JSON形式のログレイヤー（CloudWatch向け）
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        // 既に別のサブスクライバーが設定済みの場合は何もしない
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = build_env_filter("debug,aws_smithy_runtime=info");

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
