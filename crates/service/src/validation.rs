use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::not_blank;

    #[test]
    fn blank_values_fail() {
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
        assert!(not_blank(" x ").is_ok());
    }
}
