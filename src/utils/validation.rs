use crate::utils::error::{CalibrationError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(CalibrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(CalibrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
