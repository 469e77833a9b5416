//! Workflow layer between argument parsing and the domain engine

pub mod orchestration;

pub use orchestration::{run_workflow, WorkflowResult};
