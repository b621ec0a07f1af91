//! Agent UI Backend Core Library
//! Shared logic for configuration, the upstream agent client, and the proxy server

pub mod config;
pub mod proxy;
