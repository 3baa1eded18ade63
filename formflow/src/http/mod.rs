//! HTTP access to the remote service.

mod client;
#[cfg(feature = "http-client")]
mod reqwest_client;

#[cfg(test)]
pub(crate) use client::MockHttpClient;
pub use client::{HttpClient, HttpResponse};
#[cfg(feature = "http-client")]
pub use reqwest_client::ReqwestHttpClient;
