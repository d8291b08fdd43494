//! Typed client for the Xendit disbursement API.
//!
//! * [`objects`] – request and response bodies exchanged with the API.
//! * [`errors`] – the error-code taxonomy reported by the service.
//! * [`config`] – connection settings shared by the clients.
//! * [`client`] – the HTTP clients (behind the `client` feature).

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod errors;
pub mod objects;

#[cfg(feature = "client")]
pub use client::{ClientError, DisbursementClient};
pub use config::{ClientConfig, ConfigError};
pub use errors::{DisbursementError, DisbursementErrorKind};
pub use objects::disbursement::{
    CreateDisbursement, Disbursement, DisbursementStatus, RequestHeaders,
};
