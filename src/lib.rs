//! Reg Assist — guided registration intake agent.

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod validate;
