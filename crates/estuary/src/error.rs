use crate::graph::Endpoint;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("link {link} references a missing node: {endpoint}")]
    InvalidReference { link: usize, endpoint: Endpoint },
    #[error("link {link} has an invalid value: {value}")]
    InvalidValue { link: usize, value: f64 },
    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
