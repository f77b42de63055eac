// src/application/commands/records/mod.rs
mod create;
mod service;
mod update;

pub use create::{CreateRecordCommand, CreateRecordCommandBuilder};
pub use service::RecordCommandService;
pub use update::UpdateRecordCommand;
