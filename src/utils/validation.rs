use crate::utils::error::{BookingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Free-text draft fields count as unset when empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(BookingError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(BookingError::ConfigError {
                message: format!("Duplicate {}: {}", field_name, value),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("0500000000"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency", "SAR").is_ok());
        assert!(validate_non_empty_string("currency", "  ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("category id", ["cleaning", "plumber"]).is_ok());
        assert!(validate_unique("category id", ["cleaning", "cleaning"]).is_err());
    }
}
