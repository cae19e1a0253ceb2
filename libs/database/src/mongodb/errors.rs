use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// True when `err` is a unique index violation (E11000), whether reported as
/// a write error or a command error.
pub fn is_duplicate_key_error(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
