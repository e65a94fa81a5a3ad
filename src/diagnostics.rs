//! Last-error diagnostics context
//!
//! One (code, message) slot per thread, written whenever a file-level
//! operation fails and read back through `last_error_code` /
//! `last_error_message`. The slot is never cleared on success: a
//! caller decides success from the operation's own `Result`, not from
//! this context.

use std::cell::RefCell;

use crate::error::{AudiokitError, ErrorCode};

thread_local! {
    static LAST_ERROR: RefCell<(ErrorCode, String)> =
        RefCell::new((ErrorCode::Ok, String::new()));
}

/// Overwrite the current thread's error slot with `err`.
pub fn record_error(err: &AudiokitError) {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = (err.code(), err.to_string());
    });
}

/// Code of the most recent failure on this thread, `ErrorCode::Ok` if
/// nothing has failed yet.
pub fn last_error_code() -> ErrorCode {
    LAST_ERROR.with(|slot| slot.borrow().0)
}

/// Message of the most recent failure on this thread, empty if nothing
/// has failed yet.
pub fn last_error_message() -> String {
    LAST_ERROR.with(|slot| slot.borrow().1.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatKind;

    #[test]
    fn test_empty_before_any_failure() {
        // Runs on its own test thread, so the slot starts pristine.
        assert_eq!(last_error_code(), ErrorCode::Ok);
        assert_eq!(last_error_message(), "");
    }

    #[test]
    fn test_record_and_read_back() {
        record_error(&AudiokitError::format(FormatKind::BadTag, "expected RIFF"));
        assert_eq!(last_error_code(), ErrorCode::Format);
        assert!(last_error_message().contains("expected RIFF"));

        // A later failure overwrites the slot.
        record_error(&AudiokitError::io("short read"));
        assert_eq!(last_error_code(), ErrorCode::Io);
        assert!(last_error_message().contains("short read"));
    }

    #[test]
    fn test_threads_do_not_share_slots() {
        record_error(&AudiokitError::internal("main thread"));

        let handle = std::thread::spawn(|| {
            assert_eq!(last_error_code(), ErrorCode::Ok);
            record_error(&AudiokitError::io("worker thread"));
            assert_eq!(last_error_code(), ErrorCode::Io);
        });
        handle.join().unwrap();

        assert_eq!(last_error_code(), ErrorCode::Internal);
        assert!(last_error_message().contains("main thread"));
    }
}
