pub mod calendar;
pub mod common;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod machines;
pub mod maintenance;
pub mod schedule;
