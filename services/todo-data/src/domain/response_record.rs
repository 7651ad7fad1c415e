// Lambdaレスポンスレコード
//
// Lambdaランタイムへ返却するHTTP風の`{statusCode, body}`エンベロープ。
// bodyはパース済みJSONをそのまま保持し、文字列化しない。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// ステータスコードとJSONボディを持つレスポンスレコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// HTTPステータスコード
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// パース済みJSON値（オブジェクト、配列、スカラーのいずれか）
    pub body: Value,
}

impl ResponseRecord {
    /// 200レスポンスを作成
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }
}
