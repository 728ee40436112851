//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! content provider.

use crate::core::Config;

pub mod connection_info;

pub use connection_info::ConnectionInfoResource;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Render the resource content for this server configuration.
    fn content(config: &Config) -> String;
}
