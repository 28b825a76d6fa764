use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

/// Type of binary to execute
#[derive(Debug, Clone)]
pub enum BinaryType {
    /// Our own binary built by cargo
    Cargo(String),
    /// System binary available in PATH
    System(String),
}

impl BinaryType {
    /// Create a new cargo binary type
    pub fn cargo(name: impl Into<String>) -> Self {
        Self::Cargo(name.into())
    }

    /// Create a new system binary type
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// Returns the path to the binary for this variant.
    ///
    /// # Panics
    ///
    /// Panics if the binary cannot be found.
    fn get_path(&self) -> PathBuf {
        match self {
            BinaryType::Cargo(name) => match name.as_str() {
                "lzdgen" => PathBuf::from(env!("CARGO_BIN_EXE_lzdgen")),
                other => panic!("Binary '{other}' is not built by this package"),
            },
            BinaryType::System(name) => find_system_binary(name)
                .unwrap_or_else(|| panic!("Binary {name} not found in PATH")),
        }
    }
}

/// Find a system binary in PATH
fn find_system_binary(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    let common_paths = ["/usr/bin", "/usr/local/bin", "/bin"];
    common_paths
        .iter()
        .map(|base| Path::new(base).join(name))
        .find(|path| path.is_file())
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        fixture
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Run a cargo binary with the specified arguments
    pub async fn run_cargo(&mut self, name: &str, args: &[&str]) -> Output {
        self.run(BinaryType::cargo(name), args, None).await
    }

    /// Run a system binary with raw stdin bytes if it is available
    pub async fn run_system_with_stdin(
        &mut self,
        name: &str,
        args: &[&str],
        stdin: &[u8],
    ) -> Option<Output> {
        if find_system_binary(name).is_some() {
            Some(self.run(BinaryType::system(name), args, Some(stdin)).await)
        } else {
            None
        }
    }

    /// Run a binary with the specified arguments and optional stdin bytes
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    async fn run(&mut self, binary_type: BinaryType, args: &[&str], stdin: Option<&[u8]>) -> Output {
        let mut child = tokio::process::Command::new(binary_type.get_path())
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        // Feed stdin from a separate task so the child can fill its stdout
        // pipe while input is still being written
        let writer = match (stdin, child.stdin.take()) {
            (Some(bytes), Some(mut child_stdin)) => {
                let bytes = bytes.to_vec();
                Some(tokio::spawn(async move {
                    if let Err(err) = child_stdin.write_all(&bytes).await {
                        if err.kind() != std::io::ErrorKind::BrokenPipe {
                            panic!("failed write to stdin ({} bytes): {err}", bytes.len());
                        }
                    }
                    // Dropping stdin sends EOF to the child process
                }))
            }
            _ => None,
        };

        let raw_output = child.wait_with_output().await.unwrap();
        if let Some(writer) = writer {
            writer.await.unwrap();
        }
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
            stdout_raw: raw_output.stdout,
        }
    }
}
