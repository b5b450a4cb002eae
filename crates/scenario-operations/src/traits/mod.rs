mod diff_source;
mod workflow_writer;

pub use diff_source::DiffSource;
pub use workflow_writer::WorkflowWriter;
