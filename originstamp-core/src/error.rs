use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OriginStampError {
    #[error("c2patool not found: {0}")]
    ToolNotFound(String),

    #[error("c2patool failed ({status}): {stderr}")]
    ToolFailed { status: ExitStatus, stderr: String },

    #[error("c2patool produced non-UTF-8 output")]
    ToolOutput(#[from] std::string::FromUtf8Error),

    #[error("at least one payment method is required (wallet address, Stripe link, or license URL)")]
    NoPaymentMethod,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OriginStampError>;
