/// TODOデータ取得Lambdaエントリポイント
///
/// S3に保存されたTODOデータJSONを取得し、
/// `{statusCode: 200, body: <JSON>}`として返却する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use todo_data::application::TodoDataHandler;
use todo_data::infrastructure::{AwsS3Ops, TodoDataConfig, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 環境変数から設定を読み込み
    let config = TodoDataConfig::from_env();
    info!(
        location = %config.location(),
        endpoint_url = ?config.endpoint_url(),
        "TODOデータLambda関数を初期化"
    );

    // S3クライアントは実行環境ごとに1つ作成する
    let store = AwsS3Ops::from_config(config.endpoint_url()).await;
    let handler = TodoDataHandler::new(store, config.location().clone());
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.invoke(event).await
    }))
    .await
}
