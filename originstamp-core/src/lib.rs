//! OriginStamp Core - payment metadata for C2PA-enabled media
//!
//! This crate provides the building blocks for the OriginStamp CLI:
//! the payment assertion embedded in C2PA manifests, the minimal manifest
//! definition staged for embedding, and the wrapper around the external
//! `c2patool` binary that performs all real manifest I/O.
//!
//! # Example
//!
//! ```
//! use originstamp_core::{PaymentAssertion, PaymentData, StampManifestBuilder};
//!
//! # fn example() -> originstamp_core::Result<()> {
//! let assertion = PaymentAssertion::new(PaymentData {
//!     wallet_address: Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".into()),
//!     ..PaymentData::default()
//! })?;
//!
//! let manifest = StampManifestBuilder::new(assertion).build_manifest_json()?;
//! assert!(manifest.contains("com.originstamp.payment"));
//! # Ok(())
//! # }
//! ```

pub mod assertion;
pub mod error;
pub mod manifest;
pub mod tool;

// Re-export main types for convenience
pub use assertion::{PaymentAssertion, PaymentData, PAYMENT_ASSERTION_LABEL};
pub use error::{OriginStampError, Result};
pub use manifest::{StampManifestBuilder, TempManifest};
pub use tool::{C2paTool, C2PATOOL_BIN, C2PATOOL_PATH_ENV};
