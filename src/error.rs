//! Errors

use thiserror::Error;

/// Errors raised while building or rendering a scene
///
/// Sampling itself never fails; everything here is reported before
/// the first pixel is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("scene object has no segments")]
    EmptyObject,
    #[error("segment is not monotonic: {0}")]
    NonMonotonic(String),
    #[error("transform is not invertible")]
    SingularTransform,
    #[error("invalid configuration token {token:?}: {reason}")]
    Config { token: String, reason: String },
    #[error("viewport {width}x{height} is empty")]
    EmptyViewport { width: usize, height: usize },
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
