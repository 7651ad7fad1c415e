// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod object_store_ops;

// Re-exports
pub use config::TodoDataConfig;
pub use logging::init_logging;
pub use object_store_ops::{AwsS3Ops, ObjectStoreError, ObjectStoreOps};
