//! Persistence and rendering configuration.

/// Options for writing and rendering reports.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to sync the report file to durable storage after writing.
    pub sync_on_write: bool,

    /// Whether to create missing parent directories when writing.
    pub create_dirs: bool,

    /// Whether rendered documents are pretty-printed.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_on_write: true,
            create_dirs: false,
            pretty: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to sync after writing.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Sets whether rendered documents are pretty-printed.
    #[must_use]
    pub const fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }
}
