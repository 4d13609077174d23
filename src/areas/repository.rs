use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Repository {
    pub fn new(
        path: impl AsRef<Path>,
        git_program: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .with_context(|| format!("Could not open workspace {}", path.display()))?;
        let workspace = Workspace::new(path.into_boxed_path(), git_program.into());

        Ok(Repository {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn refs(&self) -> Refs<'_> {
        Refs::new(&self.workspace)
    }

    pub fn reflog(&self) -> Reflog<'_> {
        Reflog::new(&self.workspace)
    }
}
