use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with arguments.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fincat"));
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with a custom HOME directory for isolated config storage.
pub fn run_cli_with_env(args: &[&str], home: &Path, catalog_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fincat"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    // Point commands at the test catalog unless one is given explicitly
    if !args.contains(&"--catalog") {
        cmd.env("FINCAT_CATALOG", catalog_url);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with a custom HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, catalog_url: &str) -> String {
    let output = run_cli_with_env(args, home, catalog_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
