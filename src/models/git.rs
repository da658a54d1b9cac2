use std::fmt;

/// Label shown when no branch information is available.
pub const NO_GIT: &str = "No Git";

/// What `HEAD` points at, as far as the probe chain could tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHead {
    Branch(String),
    Tag(String),
    Detached(String),
}

impl GitHead {
    pub fn kind(&self) -> &'static str {
        match self {
            GitHead::Branch(_) => "branch",
            GitHead::Tag(_) => "tag",
            GitHead::Detached(_) => "detached",
        }
    }
}

impl fmt::Display for GitHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHead::Branch(name) => f.write_str(name),
            GitHead::Tag(tag) => write!(f, "tag:{tag}"),
            GitHead::Detached(hash) => write!(f, "detached:{hash}"),
        }
    }
}
