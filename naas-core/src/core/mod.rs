pub mod errors;

pub use errors::{ErrorCode, NaasError, Result};

/// Current wall-clock time as unix seconds.
pub fn now_secs() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
