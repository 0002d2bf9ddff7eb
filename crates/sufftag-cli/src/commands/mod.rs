/// Unwrap `$result`, or return early from the command with a formatted
/// message. `main` prints it and exits once logging has been flushed.
macro_rules! fail {
    ($result:expr, $($arg:tt)*) => {
        match $result {
            Ok(v) => v,
            Err(e) => return Err(format!($($arg)*, e)),
        }
    };
}

pub mod config_ops;
pub mod guess_ops;

/// Error message of a failed command.
pub type CommandResult = Result<(), String>;
