pub mod error;
pub mod math;
pub mod tessellation;
pub mod transform;

pub use error::{KernelError, Result};
pub use transform::Affine2D;
