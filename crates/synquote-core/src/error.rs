use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Selection parsing errors
    #[error("Invalid reader protocol: {0}")]
    InvalidProtocol(String),

    #[error("Invalid reader deployment: {0}")]
    InvalidDeployment(String),

    #[error("Invalid comms type: {0}")]
    InvalidCommsType(String),

    #[error("Invalid system type: {0}")]
    InvalidSystemType(String),

    #[error("Unknown controller model: {0}")]
    UnknownModel(String),

    // Topology matrix errors
    #[error("Topology matrix error: {0}")]
    TopologyMatrix(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
