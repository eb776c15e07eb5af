pub mod auth;
pub mod calculator;
pub mod config;
pub mod del;
pub mod hours;
pub mod init;
pub mod log;
pub mod logic;
pub mod punch;
pub mod session;
