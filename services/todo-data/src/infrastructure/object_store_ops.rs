//! オブジェクトストレージ操作モジュール
//!
//! S3からオブジェクト本体を取得する読み取り専用の操作を提供する。
//! - GetObjectで本体バイト列を全量取得
//! - S3エラーを種別ごとに分類
//!
//! 書き込み・削除操作は提供しない。

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::ObjectLocation;

/// オブジェクトストレージ操作のエラー型
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    /// オブジェクトが存在しない
    #[error("オブジェクトが見つかりません: {0}")]
    NotFound(String),
    /// バケットまたはオブジェクトへのアクセス拒否
    #[error("アクセスが拒否されました: {0}")]
    AccessDenied(String),
    /// S3への通信失敗（接続失敗、タイムアウト）
    #[error("S3への通信に失敗しました: {0}")]
    Transport(String),
    /// その他のAWS SDKエラー
    #[error("AWS S3 APIエラー: {0}")]
    AwsSdkError(String),
    /// レスポンス本体の読み取り失敗
    #[error("オブジェクト本体の読み取りに失敗しました: {0}")]
    BodyRead(String),
}

/// オブジェクトストレージ操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait ObjectStoreOps: Send + Sync {
    /// オブジェクト本体を全量取得する
    ///
    /// # 引数
    /// * `location` - 取得対象のバケットとキー
    ///
    /// # 戻り値
    /// * `Ok(Vec<u8>)` - オブジェクト本体のバイト列
    /// * `Err(ObjectStoreError)` - エラー
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, ObjectStoreError>;
}

/// 実際のAWS S3 SDKを使用したオブジェクトストレージ操作実装
#[derive(Debug, Clone)]
pub struct AwsS3Ops {
    client: S3Client,
}

impl AwsS3Ops {
    /// 新しいAwsS3Opsを作成
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// AWS設定からクライアントを作成
    ///
    /// 認証情報とリージョンはデフォルトの解決チェーンに従う。
    /// `endpoint_url`を指定した場合はローカルエミュレータ向けに
    /// パススタイルのアドレッシングを使用する。
    pub async fn from_config(endpoint_url: Option<&str>) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let client = match endpoint_url {
            Some(url) => {
                let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
                    .endpoint_url(url)
                    .force_path_style(true)
                    .build();
                S3Client::from_conf(s3_config)
            }
            None => S3Client::new(&sdk_config),
        };

        Self::new(client)
    }
}

#[async_trait]
impl ObjectStoreOps for AwsS3Ops {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, ObjectStoreError> {
        debug!(bucket = %location.bucket, key = %location.key, "GetObject実行");

        let response = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    location = %location,
                    error = %DisplayErrorContext(&err),
                    "GetObjectエラー"
                );
                classify_sdk_error(err, location)
            })?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|err| ObjectStoreError::BodyRead(format!("{}: {}", location, err)))?;

        Ok(body.into_bytes().to_vec())
    }
}

/// GetObjectのSDKエラーを分類する
///
/// 通信レベルの失敗はサービスエラーに変換する前に判定する。
fn classify_sdk_error(
    err: SdkError<GetObjectError, HttpResponse>,
    location: &ObjectLocation,
) -> ObjectStoreError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            ObjectStoreError::Transport(format!("{}: {}", location, DisplayErrorContext(&err)))
        }
        other => classify_service_error(other.into_service_error(), location),
    }
}

/// S3サービスエラーを分類する
pub fn classify_service_error(err: GetObjectError, location: &ObjectLocation) -> ObjectStoreError {
    if err.is_no_such_key() {
        return ObjectStoreError::NotFound(location.to_string());
    }

    match err.code() {
        Some("NoSuchBucket") => ObjectStoreError::NotFound(location.to_string()),
        Some("AccessDenied") => ObjectStoreError::AccessDenied(location.to_string()),
        _ => ObjectStoreError::AwsSdkError(format!("{}: {}", location, err)),
    }
}
