pub mod config;
pub mod formatters;
pub mod gateway;
pub mod interactive_ratatui;
pub mod logging;

pub use config::{BrowserOptions, Credentials, GatewayConfig};
pub use gateway::{ElasticGateway, GatewayError, SearchGateway};
pub use interactive_ratatui::InteractiveBrowser;
