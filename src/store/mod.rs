//! Storage layer: YAML file store under `.helpdesk/`

mod file;

pub use file::FileStorage;
