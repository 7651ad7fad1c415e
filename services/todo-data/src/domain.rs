// Domain layer modules
pub mod object_location;
pub mod response_record;

// Re-exports
pub use object_location::{DEFAULT_BUCKET, DEFAULT_KEY, ObjectLocation};
pub use response_record::{ResponseRecord, STATUS_OK};
