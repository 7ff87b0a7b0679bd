//! Signature & Cache (spec §4.7): structural signature computation plus
//! the on-disk, advisory-locked signature set the Orchestrator consults
//! before running the Transformer.

mod cache;
mod signature;

pub use cache::SignatureCache;
pub use signature::{compute_signature, DeclKind, SIGNATURE_VERSION};
