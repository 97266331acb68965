//! Domain types: NEXO request parameters and their wire shape, the session
//! exchange payloads, decoded responses, and the ports the application layer
//! talks through.

pub mod message;
pub mod nexo;
pub mod ports;
pub mod response;
pub mod session;
