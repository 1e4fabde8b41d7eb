//! bison configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the bison executable.
pub const BISON_ENV: &str = "NEOLOGISM_BISON";

/// Environment variable replacing `PATH` for the bison child process.
pub const BISON_PATH_ENV: &str = "NEOLOGISM_BISON_PATH";

/// How to find and run bison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BisonConfig {
    /// Executable name or path
    pub executable: PathBuf,
    /// `PATH` for the child process (inherited when `None`)
    pub search_path: Option<OsString>,
}

impl Default for BisonConfig {
    fn default() -> Self {
        BisonConfig {
            executable: std::env::var_os(BISON_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("bison")),
            search_path: std::env::var_os(BISON_PATH_ENV),
        }
    }
}

impl BisonConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Use a specific executable, inheriting `PATH`
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        BisonConfig {
            executable: executable.into(),
            search_path: None,
        }
    }

    /// Replace `PATH` for the child process
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// The `PATH` value the child process will see.
    pub fn effective_path(&self) -> OsString {
        self.search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"))
            .unwrap_or_default()
    }
}
