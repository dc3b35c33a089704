use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64),
}
