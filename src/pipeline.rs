//! Copy, zero, and optionally inspect a CICE initial-condition file.
//!
//! Stages run strictly in order and the first failure aborts the rest. A
//! destination left behind by a failed zeroing step is not cleaned up.

use {
    crate::{
        error::Error,
        fields::{verify_list, NCAP2_EXPR},
        parameters::Tools,
        precheck::{self, Located},
        resolve::RunConfig,
        tool::ToolCommand,
    },
    log::info,
    std::{
        fs::{self, File, FileTimes},
        path::Path,
    },
};

/// Runs every stage for `config`.
pub fn run(config: &RunConfig, tools: &Tools) -> Result<(), Error> {
    let located = precheck::check(config, tools)?;

    materialize(&config.src, &config.dst, config.dry_run)?;
    zero_fields(&located, &config.dst, config.dry_run)?;

    if config.verify {
        verify(&located, &config.dst, config.dry_run)?;
    }

    info!("Done.");

    Ok(())
}

/// Copies `src` to `dst` keeping permission bits and timestamps.
pub fn materialize(src: &Path, dst: &Path, dry_run: bool) -> Result<(), Error> {
    info!("Copying:\n  SRC: {}\n  DST: {}", src.display(), dst.display());

    if dry_run {
        return Ok(());
    }

    fs::copy(src, dst).map_err(Error::fs("copy to", dst))?;

    let metadata = fs::metadata(src).map_err(Error::fs("read metadata of", src))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    // read-only handle: the copied permission bits may forbid writing
    File::open(dst)
        .and_then(|f| f.set_times(times))
        .map_err(Error::fs("set timestamps of", dst))
}

/// Applies [`NCAP2_EXPR`] to `dst` in place.
pub fn zero_fields(located: &Located, dst: &Path, dry_run: bool) -> Result<(), Error> {
    ToolCommand::edit_in_place(&located.editor, NCAP2_EXPR, dst)
        .run(dry_run)
        .map(drop)
}

/// Dumps the verification variables straight to stdout.
///
/// Nothing is asserted; the dump is for a human to read.
pub fn verify(located: &Located, dst: &Path, dry_run: bool) -> Result<(), Error> {
    let inspector = match &located.inspector {
        Some(inspector) => inspector,
        None => return Ok(()),
    };

    ToolCommand::inspect(inspector, &verify_list(), dst)
        .run(dry_run)
        .map(drop)
}
