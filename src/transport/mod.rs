//! HTTP transport layer for the Gemini binding.

pub mod endpoints;
mod error;
mod http;
mod request;
mod reqwest;
mod response;

pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use request::RequestBuilder;
pub use reqwest::ReqwestTransport;
pub use response::ResponseParser;
