//! Custom C2PA assertion carrying payment metadata
//!
//! This module defines the `PaymentAssertion` which records how the creator
//! of a piece of media can be paid, for embedding within a C2PA manifest.

use serde::{Deserialize, Serialize};

use crate::error::{OriginStampError, Result};

/// Label for the OriginStamp payment assertion in C2PA manifests
pub const PAYMENT_ASSERTION_LABEL: &str = "com.originstamp.payment";

/// Payment routes offered for a piece of content.
///
/// Every field is optional on the wire and omitted when unset; an assertion
/// must carry at least one route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Cryptocurrency wallet address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,

    /// Stripe payment link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_link: Option<String>,

    /// License purchase URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

impl PaymentData {
    /// True when no payment route is set.
    pub fn is_empty(&self) -> bool {
        self.wallet_address.is_none() && self.stripe_link.is_none() && self.license_url.is_none()
    }
}

/// Custom C2PA assertion containing payment routing data.
///
/// Created fresh per invocation, serialized to JSON for the manifest
/// definition, and discarded with the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAssertion {
    /// Assertion label, always `com.originstamp.payment`
    pub label: String,

    /// Payment routes
    pub data: PaymentData,
}

impl PaymentAssertion {
    /// Create an assertion from payment data.
    ///
    /// Data with no payment route set is rejected.
    pub fn new(data: PaymentData) -> Result<Self> {
        if data.is_empty() {
            return Err(OriginStampError::NoPaymentMethod);
        }

        Ok(Self {
            label: PAYMENT_ASSERTION_LABEL.to_string(),
            data,
        })
    }

    /// Pretty-printed JSON, as shown to the user when stamping.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet_only() -> PaymentData {
        PaymentData {
            wallet_address: Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string()),
            ..PaymentData::default()
        }
    }

    #[test]
    fn test_empty_data_is_rejected() {
        let err = PaymentAssertion::new(PaymentData::default()).unwrap_err();
        assert!(matches!(err, OriginStampError::NoPaymentMethod));
    }

    #[test]
    fn test_is_empty() {
        assert!(PaymentData::default().is_empty());
        assert!(!wallet_only().is_empty());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let assertion = PaymentAssertion::new(wallet_only()).expect("assertion");
        let json = serde_json::to_string(&assertion).expect("serialize");

        assert!(json.contains("wallet_address"));
        assert!(!json.contains("stripe_link"));
        assert!(!json.contains("license_url"));
    }

    #[test]
    fn test_assertion_serialization() {
        let assertion = PaymentAssertion::new(PaymentData {
            wallet_address: Some("0xABCDEF0123".to_string()),
            stripe_link: Some("https://buy.stripe.com/test_abc".to_string()),
            license_url: Some("https://example.com/license".to_string()),
        })
        .expect("assertion");

        let json = serde_json::to_string(&assertion).expect("serialize");
        let parsed: PaymentAssertion = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(parsed.label, PAYMENT_ASSERTION_LABEL);
        assert_eq!(parsed.data, assertion.data);
    }
}
