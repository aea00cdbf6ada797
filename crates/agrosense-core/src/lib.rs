pub mod constants;
pub mod error;
pub mod types;
pub mod metrics;
pub mod submission;

pub use constants::*;
pub use error::AgroError;
pub use types::*;
pub use metrics::*;
pub use submission::*;
