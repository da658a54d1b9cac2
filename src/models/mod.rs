pub mod git;
pub mod hook;
pub mod message;

pub use git::{GitHead, NO_GIT};
pub use hook::HookJson;
pub use message::{MessageUsage, TranscriptLine};
