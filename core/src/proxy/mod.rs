//! Proxy module - HTTP reverse proxy in front of the AI agent service

pub mod handlers;
pub mod server;
pub mod upstream;


pub use server::ProxyServer;
pub use upstream::UpstreamClient;
