pub mod badge;
pub mod config_io;
pub mod gateway;
