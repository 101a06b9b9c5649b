//! Recover readable source and module structure from a bundle whose
//! payload is wrapped in one large, line-split, escaped string literal.
//!
//! The extraction core (the `decode` and `emit` modules) is pure,
//! synchronous and
//! deterministic: the same raw input always produces byte-identical
//! artifacts, and a failed structural assumption aborts the run with a
//! typed [`DecodeError`]. Fetching, settings, artifact persistence and
//! gist upload are collaborators around that core ([`fetch`], [`config`],
//! [`upload`], [`cli`]).

pub mod cli;
pub mod config;
pub mod decode;
pub mod emit;
pub mod error;
pub mod fetch;
pub mod upload;

pub use decode::{decode, Decoded};
pub use error::DecodeError;
