use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// The working tree whose history is being read
///
/// Both git collaborators run rooted at this path, so the process' own
/// current directory never decides which repository is read.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    git_program: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>, git_program: Box<Path>) -> Self {
        Workspace { path, git_program }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a git invocation with stdout piped and stdin closed
    pub fn git(&self, args: &[&str]) -> Command {
        let mut command = Command::new(self.git_program.as_ref());
        command
            .args(args)
            .current_dir(self.path.as_ref())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    /// Human readable form of a git invocation, used in errors and logs
    pub fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.git_program.to_string_lossy().into_owned())
            .chain(args.iter().map(|arg| arg.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
