//! Shared test utilities: fake jq executables.

#![allow(dead_code)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temp directory holding one fake jq script.
pub struct FakeJq {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl FakeJq {
    /// Create an executable `/bin/sh` script named `jq` with `body`.
    ///
    /// `$DIR` inside `body` expands to the temp directory, handy for
    /// recording what the script saw.
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("jq");
        let script = format!(
            "#!/bin/sh\nDIR='{}'\n{}\n",
            dir.path().display(),
            body
        );
        write_executable(&path, &script);
        Self { dir, path }
    }

    /// Echoes stdin to stdout and records its arguments and input.
    pub fn recording() -> Self {
        Self::new(
            r#"printf '%s\n' "$@" > "$DIR/args"
cat > "$DIR/stdin"
cat "$DIR/stdin""#,
        )
    }

    /// Arguments the script received, one per line.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let raw = std::fs::read_to_string(self.dir.path().join("args")).ok()?;
        Some(raw.lines().map(String::from).collect())
    }

    /// Stdin the script received.
    pub fn recorded_stdin(&self) -> Option<Vec<u8>> {
        std::fs::read(self.dir.path().join("stdin")).ok()
    }

    /// Whether the script ran at all.
    pub fn was_invoked(&self) -> bool {
        self.dir.path().join("args").exists()
    }
}

fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write fake jq");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake jq executable");
    }
}

pub fn args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}
