pub mod cli;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod poller;
pub mod run;
pub mod shutdown;
