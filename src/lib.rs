pub mod config;
pub mod http_client;
pub mod leagues_fetch;
pub mod provider;
pub mod state;
pub mod ui;
