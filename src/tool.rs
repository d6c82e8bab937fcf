use {
    crate::error::Error,
    log::{info, warn},
    std::{
        ffi::OsString,
        fmt,
        path::{Path, PathBuf},
        process::{Command, Stdio},
    },
};

/// A fully specified external command.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// `<editor> -O -s <expr> <path> <path>`, rewriting `path` in place
    pub fn edit_in_place(editor: &Path, expression: &str, path: &Path) -> Self {
        ToolCommand {
            program: editor.to_owned(),
            args: vec![
                "-O".into(),
                "-s".into(),
                expression.into(),
                path.into(),
                path.into(),
            ],
        }
    }

    /// `<inspector> -H -C -v <a,b,c> <path>`
    pub fn inspect(inspector: &Path, variables: &str, path: &Path) -> Self {
        ToolCommand {
            program: inspector.to_owned(),
            args: vec![
                "-H".into(),
                "-C".into(),
                "-v".into(),
                variables.into(),
                path.into(),
            ],
        }
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Echoes the command, then runs it to completion unless `dry_run`.
    ///
    /// Standard output streams straight to ours. Standard error is captured:
    /// a non-zero exit turns it into the error, otherwise it is logged as a
    /// warning and returned. Returns `None` in dry-run.
    pub fn run(&self, dry_run: bool) -> Result<Option<String>, Error> {
        info!("+ {}", self);

        if dry_run {
            return Ok(None);
        }

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .and_then(|child| child.wait_with_output())
            .map_err(|e| Error::ToolFailed {
                tool: self.name(),
                status: "not started".into(),
                detail: e.to_string(),
            })?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();

        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: self.name(),
                status: output.status.to_string(),
                detail: stderr,
            });
        }

        if !stderr.is_empty() {
            warn!("{}: {}", self.name(), stderr);
        }

        Ok(Some(stderr))
    }

    fn name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or_else(|| self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
