pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, SafeIndyError};
pub use events::EventBus;
pub use id::{new_correlation_id, SessionToken};

pub type Result<T> = std::result::Result<T, SafeIndyError>;
