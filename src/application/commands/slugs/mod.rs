// src/application/commands/slugs/mod.rs
mod orchestrate;
mod service;

pub use service::SlugOrchestrator;
