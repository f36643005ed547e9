pub mod axe;
pub mod config;
pub mod environment;
