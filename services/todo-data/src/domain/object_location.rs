// 取得対象オブジェクトの所在
//
// バケット名とオブジェクトキーの組。設定から構築され、
// 呼び出しイベントからは導出しない。

use std::fmt;

/// デフォルトのバケット名
pub const DEFAULT_BUCKET: &str = "cohort4-group3-cap2";

/// デフォルトのオブジェクトキー
pub const DEFAULT_KEY: &str = "todo-data.json";

/// S3オブジェクトの所在（バケット + キー）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    /// バケット名
    pub bucket: String,
    /// オブジェクトキー
    pub key: String,
}

impl ObjectLocation {
    /// 新しいObjectLocationを作成
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl Default for ObjectLocation {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET, DEFAULT_KEY)
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
