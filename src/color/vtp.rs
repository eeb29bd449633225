//! Virtual terminal processing for Windows consoles.
//!
//! Legacy conhost only interprets ANSI escape sequences once
//! `ENABLE_VIRTUAL_TERMINAL_PROCESSING` is set on the output handle.

/// Enables virtual terminal processing on stdout.
///
/// Returns true when the mode is enabled after the call. Always false on
/// platforms other than Windows, where there is nothing to enable.
#[cfg(windows)]
#[allow(unsafe_code)]
pub fn enable_virtual_terminal_processing() -> bool {
    use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
    use windows_sys::Win32::System::Console::{
        ENABLE_VIRTUAL_TERMINAL_PROCESSING, GetConsoleMode, GetStdHandle, STD_OUTPUT_HANDLE,
        SetConsoleMode,
    };

    // SAFETY: the handle comes from `GetStdHandle` and is checked before use;
    // `mode` outlives both calls.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            log::debug!("vtp: no console attached to stdout");
            return false;
        }
        let mut mode = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            log::debug!("vtp: stdout is not a console");
            return false;
        }
        if mode & ENABLE_VIRTUAL_TERMINAL_PROCESSING != 0 {
            return true;
        }
        let ok = SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) != 0;
        if !ok {
            log::warn!("vtp: SetConsoleMode refused virtual terminal processing");
        }
        ok
    }
}

/// Enables virtual terminal processing on stdout.
///
/// Returns true when the mode is enabled after the call. Always false on
/// platforms other than Windows, where there is nothing to enable.
#[cfg(not(windows))]
pub fn enable_virtual_terminal_processing() -> bool {
    false
}
