#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid max level: {0}, must be at least 1")]
    InvalidMaxLevel(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
