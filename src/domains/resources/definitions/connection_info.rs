//! Connection info resource definition.

use super::ResourceDefinition;
use crate::core::Config;

/// Plain-text summary of the server and the product API it talks to.
pub struct ConnectionInfoResource;

impl ResourceDefinition for ConnectionInfoResource {
    const URI: &'static str = "test:///";
    const NAME: &'static str = "test";
    const DESCRIPTION: &'static str = "Server and product API connection details";
    const MIME_TYPE: &'static str = "text/plain";

    fn content(config: &Config) -> String {
        format!(
            "{} v{}\nProduct API: {}",
            config.server.name, config.server.version, config.api.base_url
        )
    }
}
