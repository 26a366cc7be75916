use crate::utils::error::{DecommentError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DecommentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DecommentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DecommentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| DecommentError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DecommentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_exclusive(first: &str, first_set: bool, second: &str, second_set: bool) -> Result<()> {
    if first_set && second_set {
        return Err(DecommentError::InvalidConfigValueError {
            field: first.to_string(),
            value: "true".to_string(),
            reason: format!("cannot be combined with --{}", second.replace('_', "-")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "src/main.js").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_file_bytes", 5, 1).is_ok());
        assert!(validate_positive_number("max_file_bytes", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("python".to_string());
        assert_eq!(validate_required_field("language", &present).unwrap(), "python");

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field("language", &absent),
            Err(DecommentError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_exclusive() {
        assert!(validate_exclusive("in_place", true, "output", false).is_ok());
        assert!(validate_exclusive("in_place", true, "output", true).is_err());
        assert!(validate_non_empty_string("language", "   ").is_err());
    }
}
