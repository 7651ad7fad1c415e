// アプリケーション層モジュール
pub mod todo_data_handler;

// 再エクスポート
pub use todo_data_handler::{TodoDataError, TodoDataHandler};
