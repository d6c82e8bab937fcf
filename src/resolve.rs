use {
    crate::parameters::Parameters,
    std::{
        env,
        path::{Component, Path, PathBuf},
    },
};

/// Values supplied on the command line, each optional.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub src: Option<PathBuf>,
    pub dst: Option<PathBuf>,
    pub overwrite: bool,
    pub dry_run: bool,
    pub verify: bool,
}

/// Fully resolved, immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub overwrite: bool,
    pub dry_run: bool,
    pub verify: bool,
}

impl RunConfig {
    /// Fills in missing paths from `parameters` and expands `~`. Performs no
    /// filesystem access.
    pub fn resolve(overrides: Overrides, parameters: &Parameters) -> Self {
        let Overrides {
            src,
            dst,
            overwrite,
            dry_run,
            verify,
        } = overrides;

        RunConfig {
            src: expand_home(&src.unwrap_or_else(|| parameters.paths.src.clone())),
            dst: expand_home(&dst.unwrap_or_else(|| parameters.paths.dst.clone())),
            overwrite,
            dry_run,
            verify,
        }
    }
}

/// Replaces a leading `~` component with `$HOME`.
pub fn expand_home(path: &Path) -> PathBuf {
    expand_home_with(path, env::var_os("HOME").map(PathBuf::from).as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let mut components = path.components();

    match (components.next(), home) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            home.join(components.as_path())
        }
        _ => path.to_owned(),
    }
}
