#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod render;
pub mod resolve;
pub mod server;
pub mod utils;
pub mod version;
