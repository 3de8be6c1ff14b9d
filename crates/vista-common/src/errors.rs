use std::path::PathBuf;

use crate::types::RegionId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("unknown region: {0}")]
    UnknownRegion(RegionId),

    #[error("out-of-order sample on {region}: seq {seq} after {last}")]
    OutOfOrderSample { region: RegionId, seq: u64, last: u64 },

    #[error("duplicate region: {0}")]
    DuplicateRegion(RegionId),

    #[error("at least one region is required")]
    NoRegions,
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("trace read error: {0}")]
    Read(String),

    #[error("trace parse error: {0}")]
    Parse(String),

    #[error("unsupported trace format: {0}")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum VistaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scroll(#[from] ScrollError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
