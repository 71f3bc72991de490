pub mod http_client;
pub mod xml;

pub use http_client::{BggHttpClient, BggSetupError};
pub use xml::BggXmlParser;
