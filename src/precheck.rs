use {
    crate::{error::Error, parameters::Tools, resolve::RunConfig},
    log::debug,
    std::{
        env, fs,
        path::{Path, PathBuf},
    },
};

/// Executables located for this run.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub editor: PathBuf,
    /// Only looked up when verification was requested
    pub inspector: Option<PathBuf>,
}

/// Validates the run before anything is copied.
///
/// The destination's parent directory is created here, dry-run or not. A
/// missing tool is reported before the destination is written so no
/// un-editable copy is left behind.
pub fn check(config: &RunConfig, tools: &Tools) -> Result<Located, Error> {
    if !config.src.exists() {
        return Err(Error::SourceNotFound(config.src.clone()));
    }

    if let Some(parent) = config.dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(Error::fs("create directory", parent))?;
    }

    if config.dst.exists() {
        if !config.overwrite {
            return Err(Error::DestinationExists(config.dst.clone()));
        }
        if same_file(&config.src, &config.dst)? {
            return Err(Error::SameFile(config.dst.clone()));
        }
    }

    let editor = which_or_die(&tools.editor)?;
    let inspector = if config.verify {
        Some(which_or_die(&tools.inspector)?)
    } else {
        None
    };

    Ok(Located { editor, inspector })
}

/// Whether `a` and `b` name the same file, through symlinks or hard links.
fn same_file(a: &Path, b: &Path) -> Result<bool, Error> {
    let canonical_a = fs::canonicalize(a).map_err(Error::fs("resolve", a))?;
    let canonical_b = fs::canonicalize(b).map_err(Error::fs("resolve", b))?;
    if canonical_a == canonical_b {
        return Ok(true);
    }

    same_inode(&canonical_a, &canonical_b)
}

#[cfg(unix)]
fn same_inode(a: &Path, b: &Path) -> Result<bool, Error> {
    use std::os::unix::fs::MetadataExt;

    let a = fs::metadata(a).map_err(Error::fs("read metadata of", a))?;
    let b = fs::metadata(b).map_err(Error::fs("read metadata of", b))?;
    Ok((a.dev(), a.ino()) == (b.dev(), b.ino()))
}

#[cfg(not(unix))]
fn same_inode(_: &Path, _: &Path) -> Result<bool, Error> {
    Ok(false)
}

fn which_or_die(tool: &str) -> Result<PathBuf, Error> {
    let found = find_executable(tool).ok_or_else(|| Error::ToolNotFound(tool.to_owned()))?;
    debug!("Found {} at {}", tool, found.display());
    Ok(found)
}

/// Resolves `name` the way a shell would: names containing a separator are
/// checked directly, bare names are searched for on `PATH`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);

    if name.is_empty() {
        return None;
    }

    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_owned());
    }

    env::split_paths(&env::var_os("PATH")?)
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
