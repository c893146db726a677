pub mod tenant;
pub mod namespace;

use naas_core::{ErrorCode, NaasError};
use tracing::{error, warn, Level};

/// Level a failed operation is logged at: caller mistakes are warnings,
/// only internal failures are errors.
pub(crate) fn failure_level(err: &NaasError) -> Level {
    match err.code() {
        ErrorCode::Internal => Level::ERROR,
        ErrorCode::NotFound | ErrorCode::AlreadyExists | ErrorCode::ValidationFailed => Level::WARN,
    }
}

pub(crate) fn log_failure(err: &NaasError, action: &str) {
    if failure_level(err) == Level::ERROR {
        error!(error = %err, code = err.code().as_str(), "{} failed", action);
    } else {
        warn!(error = %err, code = err.code().as_str(), "{} failed", action);
    }
}
