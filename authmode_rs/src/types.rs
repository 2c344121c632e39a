use std::fmt;

use clap::ValueEnum;

/// The single key the mutator rewrites.
pub const AUTH_MODE_KEY: &str = "AuthenticationMode";
pub const CONNECTION_STRING: &str = "ConnectionString";
pub const MSI: &str = "Msi";

/// Indentation width used when a file gives no usable hint.
pub const DEFAULT_INDENT: usize = 2;

/// Path substring that always excludes a file from the scan.
pub const LOCAL_RUN_OUTPUTS: &str = "LocalRunOutputs";
pub const JSON_SUFFIX: &str = ".json";

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Rewrite rule: exactly one source literal becomes exactly one target literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Direction {
    #[value(name = "ConnectionString2Msi")]
    ConnectionString2Msi,
    #[value(name = "Msi2ConnectionString")]
    Msi2ConnectionString,
}

impl Direction {
    /// Value that must be present for a rewrite to happen.
    pub fn source(self) -> &'static str {
        match self {
            Direction::ConnectionString2Msi => CONNECTION_STRING,
            Direction::Msi2ConnectionString => MSI,
        }
    }

    /// Value written in place of [`Direction::source`].
    pub fn target(self) -> &'static str {
        match self {
            Direction::ConnectionString2Msi => MSI,
            Direction::Msi2ConnectionString => CONNECTION_STRING,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ConnectionString2Msi => "ConnectionString2Msi",
            Direction::Msi2ConnectionString => "Msi2ConnectionString",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a single file during a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileOutcome {
    SkippedEmpty,
    SkippedInvalidJson,
    /// Covers both encoding problems and plain I/O read failures.
    SkippedUnreadable,
    SkippedUnmodified,
    Modified,
    WriteFailed,
}

/// Aggregate counters owned by the orchestration loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_seen: usize,
    pub modified: usize,
    pub unmodified: usize,
    pub empty: usize,
    pub invalid_json: usize,
    pub unreadable: usize,
    pub write_failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.files_seen += 1;
        match outcome {
            FileOutcome::SkippedEmpty => self.empty += 1,
            FileOutcome::SkippedInvalidJson => self.invalid_json += 1,
            FileOutcome::SkippedUnreadable => self.unreadable += 1,
            FileOutcome::SkippedUnmodified => self.unmodified += 1,
            FileOutcome::Modified => self.modified += 1,
            FileOutcome::WriteFailed => self.write_failed += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.invalid_json + self.unreadable + self.write_failed
    }
}
