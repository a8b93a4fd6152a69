//! Common utilities for integration tests

use std::path::Path;
use std::process::Command;

pub fn hubref_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hubref"))
}

/// A command whose config directory lives under `home` and which never
/// touches the OS keychain or the real API
pub fn isolated_command(home: &Path) -> Command {
    let mut cmd = hubref_command();
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home)
        .env("APPDATA", home.join("config"))
        .env("GITHUB_TOKEN", "test-token")
        .env("HUBREF_API_URL", "http://127.0.0.1:1");
    cmd
}
