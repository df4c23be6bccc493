//! Error types for toast

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToastError {
    #[error("toast: invalid audio: {0}")]
    InvalidAudio(String),

    #[error("toast: invalid duration: {0}")]
    InvalidDuration(String),

    #[error("toast: invalid activation type: {0}")]
    InvalidActivationType(String),

    #[error("Template error: {0}")]
    Template(#[source] tera::Error),

    #[error("Render error: {0}")]
    Render(#[source] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PowerShell exited with {status}: {stderr}")]
    Delivery { status: ExitStatus, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ToastError>;
