pub mod basis;
pub mod config;
pub mod experiment;
