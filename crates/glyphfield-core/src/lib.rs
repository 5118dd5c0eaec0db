pub mod error;
pub mod validate;

pub mod atlas;
pub mod checksum;
pub mod sdf;

pub use crate::atlas::params::{FieldParams, GridDims};
pub use crate::sdf::offsets::OffsetTable;
pub use crate::sdf::pixel::Pixel;
