// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gzip compression of closed log segments.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::log_paths;

/// Compress `source` into a gzip archive at `dest`, atomically.
///
/// The archive is written to `{dest}.tmp`, synced, then renamed over `dest`,
/// so `dest` either does not exist or is a complete archive. On error the
/// temporary file is removed and `source` is left untouched. Returns the
/// archive size in bytes.
pub fn gzip_atomic(source: &Path, dest: &Path, level: u32) -> io::Result<u64> {
    let tmp_path = log_paths::partial_archive_path(dest);

    let result = write_archive(source, &tmp_path, level).and_then(|size| {
        fs::rename(&tmp_path, dest)?;
        Ok(size)
    });
    if result.is_err() && tmp_path.is_file() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_archive(source: &Path, tmp_path: &Path, level: u32) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(source)?);
    let writer = BufWriter::new(File::create(tmp_path)?);
    let mut encoder = GzEncoder::new(writer, Compression::new(level));
    io::copy(&mut reader, &mut encoder)?;
    let writer = encoder.finish()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(file.metadata()?.len())
}

#[cfg(test)]
#[path = "compress_tests.rs"]
mod tests;
