//! Platform detection utilities

use std::fs;

/// Detect if running in WSL (Windows Subsystem for Linux)
///
/// Checks for WSL-specific indicators in /proc/version and environment variables.
pub fn is_wsl() -> bool {
    if let Ok(contents) = fs::read_to_string("/proc/version") {
        let lower = contents.to_lowercase();
        if lower.contains("microsoft") || lower.contains("wsl") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok()
}

/// Setup hint appended to the speech initialization failure message.
pub fn speech_setup_hint() -> &'static str {
    if is_wsl() {
        "WSL detected: speech goes through Windows, make sure a Windows voice is installed"
    } else if cfg!(target_os = "linux") {
        "on Linux, speech requires a running speech-dispatcher service"
    } else {
        "check that a system voice is installed and audible"
    }
}
