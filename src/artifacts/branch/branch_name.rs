/// A branch name as it appears in the reflog or in `git branch --list`
///
/// Opaque to this crate: the only requirements are that it is non-empty and
/// carries no surrounding whitespace. Detached HEAD positions recorded in the
/// reflog (object ids, `HEAD`) are branch names too as far as parsing goes,
/// they simply never make it past the validity filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
