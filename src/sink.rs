//! Rotating file sink.
//!
//! Splits a stream of writes across consecutively created files once a
//! configured threshold of write calls or bytes has been reached. Splitting
//! is not byte/line precise: the incoming data is never parsed or buffered,
//! and the rotation decision is made before the underlying write based on
//! the previous invocations. A single call that itself exceeds the limit
//! lands in full in the current file; the *next* call opens a new one.
//!
//! # Design
//!
//! - At most one open handle per sink, exclusively owned
//! - Lazy creation: no file exists until the first write
//! - Counters are relative to the current handle and reset on close/create
//! - Errors from the filesystem pass through unmodified
//! - Single logical writer; callers serialize concurrent use

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use time::OffsetDateTime;

use crate::{Error, Result};

/// A write sink that rotates its output file at a line or byte threshold.
///
/// Files are named `<dir>/<prefix><timestamp>` with a nanosecond-precision
/// UTC timestamp, so names are unique under rapid rotation and sort
/// lexicographically in creation order.
///
/// A `limit` of 0 disables rotation: the sink opens exactly one file and
/// keeps writing to it until explicitly closed.
pub struct RotatingSink {
    limit: u64,
    split_bytes: bool,
    dir: PathBuf,
    prefix: String,
    handle: Option<File>,
    write_count: u64,
    byte_count: u64,
}

impl RotatingSink {
    /// Create a sink that rotates after `limit` write calls (one per line
    /// for typical line-oriented producers).
    pub fn lines(limit: u64, dir: impl AsRef<Path>, prefix: &str) -> Self {
        Self::with_mode(limit, false, dir.as_ref(), prefix)
    }

    /// Create a sink that rotates after `limit` cumulative bytes.
    pub fn bytes(limit: u64, dir: impl AsRef<Path>, prefix: &str) -> Self {
        Self::with_mode(limit, true, dir.as_ref(), prefix)
    }

    fn with_mode(limit: u64, split_bytes: bool, dir: &Path, prefix: &str) -> Self {
        Self {
            limit,
            split_bytes,
            dir: normalize_dir(dir),
            prefix: normalize_prefix(prefix),
            handle: None,
            write_count: 0,
            byte_count: 0,
        }
    }

    /// Whether a file is currently open.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Write calls issued against the current handle.
    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    /// Bytes written to the current handle.
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    /// Write `data` to the sink, rotating first if the previous calls
    /// reached the threshold.
    ///
    /// Returns the byte count and error of the underlying write unmodified.
    /// If no file could be created, returns the creation error and zero
    /// bytes are written.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.handle.is_some() && self.should_rotate() {
            // The close result never blocks rollover; a failed create is
            // the error the caller needs to see.
            let _ = self.close();
        }
        if self.handle.is_none() {
            self.create()?;
        }
        let handle = self.handle.as_mut().ok_or(Error::NoOpenFile)?;
        let result = handle.write(data);
        self.write_count += 1;
        if let Ok(n) = &result {
            self.byte_count += *n as u64;
        }
        result.map_err(Error::Io)
    }

    /// Close the current file, resetting both counters.
    ///
    /// Returns [`Error::NoOpenFile`] when nothing is open, so callers can
    /// tell "nothing to close" from "close succeeded". The sink stays
    /// usable either way: the next write lazily opens a new file.
    pub fn close(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => {
                trace!(
                    "closing after {} writes / {} bytes",
                    self.write_count,
                    self.byte_count
                );
                self.write_count = 0;
                self.byte_count = 0;
                handle.sync_all().map_err(Error::Io)
            }
            None => Err(Error::NoOpenFile),
        }
    }

    /// Rotation predicate over the counters as of all *previous* writes.
    ///
    /// Byte-mode rotates solely on cumulative bytes, line-mode solely on
    /// the write count. A limit of 0 never rotates.
    fn should_rotate(&self) -> bool {
        if self.limit == 0 {
            return false;
        }
        if self.split_bytes {
            self.byte_count >= self.limit
        } else {
            self.write_count >= self.limit
        }
    }

    /// Open the next output file and make it the current handle.
    ///
    /// On failure the sink is left without a handle so the caller's next
    /// write attempts creation again; the filesystem error propagates
    /// untouched.
    fn create(&mut self) -> Result<()> {
        let path = self.dir.join(format!("{}{}", self.prefix, timestamp()));
        let file = File::create(&path)?;
        debug!("opened {}", path.display());
        self.handle = Some(file);
        self.write_count = 0;
        self.byte_count = 0;
        Ok(())
    }
}

impl io::Write for RotatingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RotatingSink::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.handle.as_mut() {
            Some(handle) => handle.flush(),
            None => Ok(()),
        }
    }
}

/// Current UTC time as a fixed-width RFC 3339-like string with nine
/// subsecond digits: `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`.
fn timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}Z",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.nanosecond(),
    )
}

/// Light path normalization; a bare "." collapses to empty so it is not
/// prepended to filenames.
fn normalize_dir(dir: &Path) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::new()
    } else {
        dir.components().collect()
    }
}

fn normalize_prefix(prefix: &str) -> String {
    if prefix == "." {
        String::new()
    } else {
        prefix.to_string()
    }
}
