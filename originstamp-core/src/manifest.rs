//! Manifest staging for payment assertions
//!
//! This module builds the minimal C2PA manifest definition that embeds a
//! payment assertion, and stages it as a temporary file for the external
//! tool to pick up.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::assertion::PaymentAssertion;
use crate::error::Result;

/// Builder for a minimal manifest definition embedding a payment assertion.
pub struct StampManifestBuilder {
    assertion: PaymentAssertion,
    claim_generator: String,
}

impl StampManifestBuilder {
    /// Create a new manifest builder from a payment assertion.
    pub fn new(assertion: PaymentAssertion) -> Self {
        Self {
            assertion,
            claim_generator: format!("OriginStamp/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set a custom claim generator string.
    pub fn with_claim_generator(mut self, generator: impl Into<String>) -> Self {
        self.claim_generator = generator.into();
        self
    }

    /// Build the manifest definition JSON handed to the external tool.
    pub fn build_manifest_json(&self) -> Result<String> {
        let manifest_def = serde_json::json!({
            "claim_generator": self.claim_generator,
            "assertions": [self.assertion],
        });

        Ok(serde_json::to_string_pretty(&manifest_def)?)
    }

    /// Stage the manifest definition as a temporary file.
    pub fn write_temp(&self) -> Result<TempManifest> {
        TempManifest::create(&self.build_manifest_json()?)
    }
}

/// Sequence number distinguishing staged manifests within one process.
static MANIFEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// A manifest definition staged on disk, removed on drop.
pub struct TempManifest {
    path: PathBuf,
}

impl TempManifest {
    fn create(json: &str) -> Result<Self> {
        let seq = MANIFEST_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "originstamp-manifest-{}-{}.json",
            std::process::id(),
            seq
        ));

        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "Staged manifest definition");

        Ok(Self { path })
    }

    /// Location of the staged manifest definition.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempManifest {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
