//! Run the compiled `dithering` binary.

use std::process::{Command, ExitStatus};

pub struct CliOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary with `args`. `CONFIG_FILE` and `RUST_LOG` are cleared so
/// the host environment does not leak into tests; pass `env` to set them.
pub fn run_cli(args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dithering"));
    command
        .args(args)
        .env_remove("CONFIG_FILE")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    let output = command.output().expect("Failed to run dithering binary");
    CliOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
