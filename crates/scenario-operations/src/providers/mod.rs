mod git;
mod git_command;
mod workflow;

pub use git::Git2DiffSource;
pub use git_command::GitCommandDiffSource;
pub use workflow::FileSystemWorkflowWriter;
