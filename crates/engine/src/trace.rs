//! Memory reference trace loading.
//!
//! A trace is a sequence of whitespace-separated pairs, `<hex-address>
//! <mode-char>`, one pair per memory reference, file order equal to
//! reference order. The mode is `R`/`r` for a read or `W`/`w` for a write.
//! Addresses are 32-bit hexadecimal, with or without a `0x` prefix.
//!
//! A malformed pair is treated as the end of usable input: parsing stops
//! there with a warning and the entries read so far stand. The whole trace
//! is held in memory so the OPT pre-scan and the replay are two passes over
//! the same entries.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::TraceError;

/// One memory reference: a 32-bit virtual address and its access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    /// Referenced virtual address.
    pub addr: u32,
    /// True for a write access, false for a read.
    pub write: bool,
}

/// A fully loaded reference trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// Reads and tokenizes a trace file.
    ///
    /// The file is opened once and closed when this call returns, on every
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened or read.
    /// Malformed content is not an error; see [`Trace::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Tokenizes trace text into reference entries.
    ///
    /// Stops at the first pair that does not parse (bad address, bad mode,
    /// or a dangling address with no mode) and returns the entries read up
    /// to that point.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut tokens = text.split_whitespace();
        loop {
            let Some(addr_token) = tokens.next() else { break };
            let Some(mode_token) = tokens.next() else {
                warn!(entry = entries.len() + 1, "trace ends mid-pair; stopping here");
                break;
            };
            let digits = addr_token
                .strip_prefix("0x")
                .or_else(|| addr_token.strip_prefix("0X"))
                .unwrap_or(addr_token);
            let Ok(addr) = u32::from_str_radix(digits, 16) else {
                warn!(
                    entry = entries.len() + 1,
                    token = addr_token,
                    "unparseable address; stopping here"
                );
                break;
            };
            let write = match mode_token {
                "R" | "r" => false,
                "W" | "w" => true,
                _ => {
                    warn!(
                        entry = entries.len() + 1,
                        token = mode_token,
                        "unparseable access mode; stopping here"
                    );
                    break;
                }
            };
            entries.push(TraceEntry { addr, write });
        }
        Self { entries }
    }

    /// Wraps already-built entries, for programmatic traces.
    pub const fn from_entries(entries: Vec<TraceEntry>) -> Self {
        Self { entries }
    }

    /// The references in file order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of successfully parsed references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the trace holds no references.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
