use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use smart_default::SmartDefault;

use crate::error::Error;

/// How the database file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    ReadOnly,
    ReadWrite,
    /// Read-write, creating the file if it does not exist
    #[default]
    ReadWriteCreate,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ro" => Ok(Mode::ReadOnly),
            "rw" => Ok(Mode::ReadWrite),
            "rwc" => Ok(Mode::ReadWriteCreate),
            other => Err(Error::BadConfigError(format!(
                "Invalid mode '{}', expected one of ro, rw, rwc",
                other
            ))),
        }
    }
}

/// A configuration for connection
///
/// ```rs
/// let mut opts1 = Opts::default();
/// opts1.busy_timeout = Duration::from_secs(1);
///
/// let opts2 = Opts::try_from("sqlite:///var/lib/app/data.db?mode=ro")?;
/// let opts3 = Opts::try_from("sqlite::memory:")?;
/// ```
#[derive(Debug, Clone, SmartDefault)]
pub struct Opts {
    /// Database file; `None` opens a private in-memory database
    pub path: Option<PathBuf>,

    pub mode: Mode,

    /// How long a statement waits on a locked database before failing.
    /// This is the only timeout applied to statements.
    #[default(Duration::from_millis(5000))]
    pub busy_timeout: Duration,

    /// SQL batch to execute after the connection is established
    pub init_command: Option<String>,
}

impl Opts {
    pub fn memory() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.is_none()
    }
}

impl TryFrom<&str> for Opts {
    type Error = Error;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        // Parse URL
        let parsed = url::Url::parse(url)
            .map_err(|e| Error::BadConfigError(format!("Failed to parse SQLite URL: {}", e)))?;

        // Verify scheme
        if parsed.scheme() != "sqlite" {
            return Err(Error::BadConfigError(format!(
                "Invalid URL scheme '{}', expected 'sqlite'",
                parsed.scheme()
            )));
        }

        // `sqlite::memory:`, `sqlite:///abs/path`, `sqlite://rel/path`
        let host = parsed.host_str().filter(|h| !h.is_empty());
        let raw_path = match (host, parsed.path()) {
            (None, ":memory:") | (None, "") | (None, "/") => None,
            (None, abs) => Some(abs.to_string()),
            (Some(first), rest) => Some(format!("{}{}", first, rest)),
        };
        let path = raw_path
            .map(|raw| {
                urlencoding::decode(&raw).map(|decoded| PathBuf::from(decoded.into_owned()))
            })
            .transpose()
            .map_err(|e| Error::BadConfigError(format!("Invalid path in SQLite URL: {}", e)))?;

        let mut opts = Self {
            path,
            ..Default::default()
        };

        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "mode" => opts.mode = value.parse()?,
                "busy_timeout" => {
                    let millis = value.parse::<u64>().map_err(|e| {
                        Error::BadConfigError(format!("Invalid busy_timeout '{}': {}", value, e))
                    })?;
                    opts.busy_timeout = Duration::from_millis(millis);
                }
                "init_command" => opts.init_command = Some(value.into_owned()),
                other => {
                    return Err(Error::BadConfigError(format!(
                        "Unknown URL parameter '{}'",
                        other
                    )));
                }
            }
        }

        Ok(opts)
    }
}

impl TryFrom<String> for Opts {
    type Error = Error;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::try_from(url.as_str())
    }
}
