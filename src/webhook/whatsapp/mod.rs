//! WhatsApp webhook integration module
//!
//! ## Submodules
//!
//! - [`handler`] - Picks the message to acknowledge and sends the acknowledgement
//! - [`routes`] - HTTP endpoint handlers for the verification handshake and deliveries
//! - [`schemas`] - Inbound notification payloads
//! - [`outgoing_schemas`] - Acknowledgement payload sent to the send API
//! - [`client`] - WhatsApp API client for sending messages

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;

pub use routes::{receive, verify};
