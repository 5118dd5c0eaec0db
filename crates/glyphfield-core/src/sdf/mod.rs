pub mod field;
pub mod offsets;
pub mod pixel;
pub mod quantize;
