pub mod selector;
pub mod workflow;
