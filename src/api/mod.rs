//! Backend API layer: request building and response decoding.
//!
//! The plugin never performs I/O from this module. It only translates between
//! the typed operations the application layer speaks ([`ApiRequest`],
//! [`ApiResponse`]) and the plain HTTP shapes Zellij's `web_request` host call
//! takes and returns.
//!
//! # Architecture
//!
//! ```text
//! Action::Send(ApiRequest) → ApiClient::build → HttpRequest → web_request
//!                                                                 │
//! Event::Api(ApiResponse) ← ApiResponse::decode ← WebRequestResult┘
//! ```
//!
//! - `request`: Operations, HTTP request shape, and the round-tripped context
//! - `client`: Request builder bound to the configured backend
//! - `response`: Body decoding and the typed outcome enum

pub mod client;
pub mod request;
pub mod response;

pub use client::{is_web_url, ApiClient};
pub use request::{ApiRequest, HttpMethod, HttpRequest, RequestContext};
pub use response::{backend_error_message, is_success, ApiResponse, UrlListBody};
