/// TODOデータ取得ハンドラー
///
/// 設定されたS3オブジェクトを取得し、UTF-8デコード・JSONパースを行い、
/// `{statusCode: 200, body: <JSON>}`形式のレスポンスレコードを返す。
///
/// 失敗時はフォールバックのレスポンスを生成せず、エラーを呼び出し元
/// （Lambdaランタイム）へそのまま伝播する。
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{ObjectLocation, ResponseRecord};
use crate::infrastructure::{ObjectStoreError, ObjectStoreOps};

/// TODOデータ取得のエラー型
#[derive(Debug, Error)]
pub enum TodoDataError {
    /// オブジェクトストレージからの取得失敗
    #[error(transparent)]
    ObjectStore(#[from] ObjectStoreError),
    /// UTF-8デコード失敗
    #[error("UTF-8デコードに失敗しました: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// JSONパース失敗
    #[error("JSONパースに失敗しました: {0}")]
    Parse(#[from] serde_json::Error),
}

/// TODOデータ取得ハンドラー
///
/// 呼び出しイベントは参照しない。取得対象は構築時に渡された
/// `ObjectLocation`で固定される。
pub struct TodoDataHandler<O>
where
    O: ObjectStoreOps,
{
    /// オブジェクトストレージ操作
    store: O,
    /// 取得対象オブジェクト
    location: ObjectLocation,
}

impl<O> TodoDataHandler<O>
where
    O: ObjectStoreOps,
{
    /// 新しいTodoDataHandlerを作成
    pub fn new(store: O, location: ObjectLocation) -> Self {
        Self { store, location }
    }

    /// 取得対象オブジェクトを取得
    pub fn location(&self) -> &ObjectLocation {
        &self.location
    }

    /// 呼び出しを処理
    ///
    /// # 処理フロー
    /// 1. 設定されたバケット/キーでGetObject
    /// 2. 本体バイト列をUTF-8としてデコード
    /// 3. JSONとしてパース
    /// 4. ステータス200のレスポンスレコードに包む
    ///
    /// # 引数
    /// * `_event` - 呼び出しイベント（使用しない）
    pub async fn handle(&self, _event: &Value) -> Result<ResponseRecord, TodoDataError> {
        let bytes = self.store.get_object(&self.location).await?;
        debug!(location = %self.location, size = bytes.len(), "オブジェクト本体を取得");

        let text = String::from_utf8(bytes)?;
        let body: Value = serde_json::from_str(&text)?;

        Ok(ResponseRecord::ok(body))
    }

    /// Lambdaイベントを処理
    ///
    /// リクエストIDをログに残し、エラーはLambdaランタイムのエラー型に
    /// 変換してそのまま返す。
    pub async fn invoke(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<ResponseRecord, lambda_runtime::Error> {
        let (payload, context) = event.into_parts();

        info!(
            request_id = %context.request_id,
            location = %self.location,
            "TODOデータ取得開始"
        );

        match self.handle(&payload).await {
            Ok(response) => {
                info!(
                    request_id = %context.request_id,
                    status_code = response.status_code,
                    "TODOデータ取得完了"
                );
                Ok(response)
            }
            Err(err) => {
                error!(
                    request_id = %context.request_id,
                    location = %self.location,
                    error = %err,
                    "TODOデータ取得失敗"
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::init_test_logging;
    use crate::infrastructure::object_store_ops::tests::MockObjectStoreOps;
    use lambda_runtime::Context;
    use serde_json::json;

    // ==================== テストヘルパー ====================

    fn location() -> ObjectLocation {
        ObjectLocation::new("test-bucket", "todo-data.json")
    }

    /// 空のモックとハンドラーを作成
    fn create_empty_handler() -> (TodoDataHandler<MockObjectStoreOps>, MockObjectStoreOps) {
        init_test_logging();
        let store = MockObjectStoreOps::new();
        let handler = TodoDataHandler::new(store.clone(), location());
        (handler, store)
    }

    /// 指定の内容を保存したモックとハンドラーを作成
    fn create_test_handler(
        contents: &[u8],
    ) -> (TodoDataHandler<MockObjectStoreOps>, MockObjectStoreOps) {
        let (handler, store) = create_empty_handler();
        store.put(location(), contents.to_vec());
        (handler, store)
    }

    // ==================== handle テスト ====================

    #[tokio::test]
    async fn test_handle_returns_stored_object() {
        let stored = json!({
            "todos": [
                {"id": 1, "title": "牛乳を買う", "done": false},
                {"id": 2, "title": "レポート提出", "done": true}
            ]
        });
        let bytes = serde_json::to_vec(&stored).unwrap();
        let (handler, _) = create_test_handler(&bytes);

        let response = handler.handle(&json!({})).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, stored);
    }

    #[tokio::test]
    async fn test_handle_empty_todos() {
        let (handler, _) = create_test_handler(br#"{"todos": []}"#);

        let response = handler.handle(&json!({})).await.unwrap();

        assert_eq!(response, ResponseRecord::ok(json!({"todos": []})));
    }

    /// 配列やスカラーもそのまま返す
    #[tokio::test]
    async fn test_handle_non_object_documents() {
        let (handler, _) = create_test_handler(b"[1, \"two\", null]");
        let response = handler.handle(&json!({})).await.unwrap();
        assert_eq!(response.body, json!([1, "two", null]));

        let (handler, _) = create_test_handler(b"42");
        let response = handler.handle(&json!({})).await.unwrap();
        assert_eq!(response.body, json!(42));
    }

    #[tokio::test]
    async fn test_handle_invalid_json_is_parse_error() {
        let (handler, _) = create_test_handler(b"{not json}");

        let result = handler.handle(&json!({})).await;

        assert!(matches!(result, Err(TodoDataError::Parse(_))));
    }

    #[tokio::test]
    async fn test_handle_non_utf8_is_decode_error() {
        let (handler, _) = create_test_handler(&[0x7b, 0xff, 0xfe, 0x7d]);

        let result = handler.handle(&json!({})).await;

        assert!(matches!(result, Err(TodoDataError::Decode(_))));
    }

    #[tokio::test]
    async fn test_handle_missing_object_is_not_found() {
        let (handler, _) = create_empty_handler();

        let result = handler.handle(&json!({})).await;

        match result {
            Err(TodoDataError::ObjectStore(ObjectStoreError::NotFound(msg))) => {
                assert_eq!(msg, "s3://test-bucket/todo-data.json");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_propagates_access_denied() {
        let (handler, store) = create_test_handler(b"{}");
        store.set_next_error(ObjectStoreError::AccessDenied(location().to_string()));

        let result = handler.handle(&json!({})).await;

        assert!(matches!(
            result,
            Err(TodoDataError::ObjectStore(ObjectStoreError::AccessDenied(_)))
        ));
    }

    #[tokio::test]
    async fn test_handle_is_idempotent() {
        let (handler, _) = create_test_handler(br#"{"todos": [{"id": 1}]}"#);

        let first = handler.handle(&json!({})).await.unwrap();
        let second = handler.handle(&json!({})).await.unwrap();

        assert_eq!(first, second);
    }

    /// イベントの内容に関わらず設定された所在のみを取得する
    #[tokio::test]
    async fn test_handle_ignores_event() {
        let (handler, store) = create_test_handler(br#"{"todos": []}"#);
        let event = json!({"bucket": "evil-bucket", "key": "secrets.json"});

        handler.handle(&event).await.unwrap();
        handler.handle(&Value::Null).await.unwrap();

        assert_eq!(store.requested(), vec![location(), location()]);
    }

    /// 保存済みオブジェクトを変更しない
    #[tokio::test]
    async fn test_handle_does_not_modify_stored_object() {
        let original = br#"{"todos": [{"id": 1}]}"#;
        let (handler, store) = create_test_handler(original);

        handler.handle(&json!({})).await.unwrap();
        let _ = handler.handle(&json!({"todos": []})).await;

        assert_eq!(store.stored(&location()), Some(original.to_vec()));
    }

    // ==================== invoke テスト ====================

    #[tokio::test]
    async fn test_invoke_returns_response_record() {
        let (handler, _) = create_test_handler(br#"{"todos": []}"#);
        let event = LambdaEvent::new(json!({"source": "test"}), Context::default());

        let response = handler.invoke(event).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 200, "body": {"todos": []}})
        );
    }

    /// エラー時はレスポンスを返さずエラーを伝播する
    #[tokio::test]
    async fn test_invoke_propagates_error() {
        let (handler, _) = create_test_handler(b"{not json}");
        let event = LambdaEvent::new(json!({}), Context::default());

        let result = handler.invoke(event).await;

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("JSONパースに失敗しました"));
    }

    #[test]
    fn test_error_display() {
        let err = TodoDataError::from(ObjectStoreError::NotFound("s3://b/k".to_string()));
        assert_eq!(err.to_string(), "オブジェクトが見つかりません: s3://b/k");

        let err = TodoDataError::from(String::from_utf8(vec![0xff]).unwrap_err());
        assert!(err.to_string().starts_with("UTF-8デコードに失敗しました"));
    }
}
