/// TODOデータ取得設定
///
/// 取得対象のバケット・キーとS3エンドポイントを環境変数から読み込む。
/// 未設定の値はデフォルトを使用する。
use crate::domain::{DEFAULT_BUCKET, DEFAULT_KEY, ObjectLocation};

/// バケット名の環境変数
pub const ENV_BUCKET: &str = "TODO_BUCKET";
/// オブジェクトキーの環境変数
pub const ENV_KEY: &str = "TODO_KEY";
/// S3エンドポイント上書きの環境変数（ローカル実行用）
pub const ENV_ENDPOINT_URL: &str = "S3_ENDPOINT_URL";

/// TODOデータ取得設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDataConfig {
    /// 取得対象オブジェクト
    location: ObjectLocation,
    /// S3エンドポイントURL（未設定時はAWSのデフォルト）
    endpoint_url: Option<String>,
}

impl TodoDataConfig {
    /// 環境変数から設定を読み込み
    ///
    /// 環境変数:
    /// - TODO_BUCKET: バケット名（デフォルト: cohort4-group3-cap2）
    /// - TODO_KEY: オブジェクトキー（デフォルト: todo-data.json）
    /// - S3_ENDPOINT_URL: S3エンドポイント（デフォルト: なし）
    ///
    /// 空文字・空白のみの値は未設定として扱う。
    pub fn from_env() -> Self {
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bucket = get_optional_string(ENV_BUCKET).unwrap_or_else(|| DEFAULT_BUCKET.to_string());
        let key = get_optional_string(ENV_KEY).unwrap_or_else(|| DEFAULT_KEY.to_string());
        let endpoint_url = get_optional_string(ENV_ENDPOINT_URL);

        Self {
            location: ObjectLocation::new(bucket, key),
            endpoint_url,
        }
    }

    /// 明示的な値で作成（テスト用）
    pub fn new(location: ObjectLocation, endpoint_url: Option<String>) -> Self {
        Self {
            location,
            endpoint_url,
        }
    }

    /// 取得対象オブジェクトを取得
    pub fn location(&self) -> &ObjectLocation {
        &self.location
    }

    /// S3エンドポイントURLを取得
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}

impl Default for TodoDataConfig {
    fn default() -> Self {
        Self::new(ObjectLocation::default(), None)
    }
}
