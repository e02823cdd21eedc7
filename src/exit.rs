use std::process::ExitCode;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Logs a failed run and maps it to the process status: 0 on success, 1 on any error.
pub fn status<T>(task: &str, result: anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "{task} failed");
            FAILURE
        }
    }
}

pub fn finish<T>(task: &str, result: anyhow::Result<T>) -> ExitCode {
    ExitCode::from(status(task, result))
}
