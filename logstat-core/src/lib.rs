pub mod analysis;
pub mod cli;
pub mod config;
pub mod handler;
pub mod logging;
