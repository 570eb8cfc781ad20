#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bubble `{id}` has magnitude {magnitude}, expected a finite value in [0, 100]")]
    MagnitudeOutOfRange { id: String, magnitude: f64 },
    #[error("duplicate bubble id: `{id}`")]
    DuplicateId { id: String },
    #[error("container dimensions must be positive and finite, got {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
