use crate::atlas::params::{FieldParams, GridDims};
use crate::error::{FieldError, Result};

pub fn validate_grid(g: &GridDims) -> Result<()> {
    if g.char_size.0 < 1 || g.char_size.1 < 1 {
        return Err(FieldError::Validation(format!(
            "char_size must be >= 1, got {}x{}",
            g.char_size.0, g.char_size.1
        )));
    }
    if g.num_chars.0 < 1 || g.num_chars.1 < 1 {
        return Err(FieldError::Validation(format!(
            "num_chars must be >= 1, got {}x{}",
            g.num_chars.0, g.num_chars.1
        )));
    }
    Ok(())
}

pub fn validate_field(p: &FieldParams) -> Result<()> {
    if p.clamp < 1 {
        return Err(FieldError::Validation(format!(
            "clamp must be >= 1, got {}",
            p.clamp
        )));
    }
    if p.scale < 1 {
        return Err(FieldError::Validation(format!(
            "scale must be >= 1, got {}",
            p.scale
        )));
    }
    if p.padding.0 < 0 || p.padding.1 < 0 {
        return Err(FieldError::Validation(format!(
            "padding must be non-negative, got ({}, {})",
            p.padding.0, p.padding.1
        )));
    }
    Ok(())
}

/// Cell indices are a caller contract for [`crate::atlas::cell::extract_cell`];
/// callers reject out-of-range indices with this before seeking.
pub fn validate_cell_index(g: &GridDims, i: i32, j: i32) -> Result<()> {
    if i < 0 || i >= g.num_chars.0 || j < 0 || j >= g.num_chars.1 {
        return Err(FieldError::Validation(format!(
            "cell index ({}, {}) outside grid {}x{}",
            i, j, g.num_chars.0, g.num_chars.1
        )));
    }
    Ok(())
}
