//! Application layer: building NEXO requests and opening SDK sessions.
//!
//! Both services are stateless between calls. `SessionAuthenticator` reaches
//! the network only through the `HttpTransport` port, so tests drive it with
//! scripted transports.

pub mod auth;
pub mod builder;
