use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

/// Fatal conditions; every one of them ends the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("src does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("dst exists (use --overwrite): {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("src and dst are the same file: {}", .0.display())]
    SameFile(PathBuf),

    #[error(
        "Required executable not found in PATH: {0}\n\
         On Gadi you may need: module load nco (or ensure NCO is in your spack env)."
    )]
    ToolNotFound(String),

    /// Spawn failure or non-zero exit; `detail` holds the tool's own stderr where available.
    #[error("{tool} failed ({status}): {detail}")]
    ToolFailed {
        tool: String,
        status: String,
        detail: String,
    },

    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Filesystem {
            action,
            path,
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceNotFound(_) => 2,
            Error::DestinationExists(_) => 3,
            Error::ToolNotFound(_) => 4,
            Error::ToolFailed { .. } => 5,
            Error::SameFile(_) => 6,
            Error::Filesystem { .. } => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            Error::SourceNotFound("a".into()),
            Error::DestinationExists("b".into()),
            Error::ToolNotFound("ncap2".into()),
            Error::SameFile("d".into()),
            Error::ToolFailed {
                tool: "ncap2".into(),
                status: "exit status: 1".into(),
                detail: String::new(),
            },
            Error::fs("copy", "c")(io::Error::new(io::ErrorKind::Other, "disk full")),
        ];

        let mut codes = errors.iter().map(Error::exit_code).collect::<Vec<_>>();
        assert_eq!(codes[..2], [2, 3]);
        assert!(codes.iter().all(|&c| c != 0));

        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn filesystem_message_names_path() {
        let e = Error::fs("create directory", "/x/y")(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(e.to_string(), "failed to create directory /x/y: denied");
    }
}
