/// Message produced for a blank required value
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Constraints applied to a single text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Whether a blank value is an error
    pub required: bool,
    /// Upper bound on the number of characters, if any
    pub character_count: Option<usize>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            required: true,
            character_count: None,
        }
    }
}

impl ValidationOptions {
    /// Required, with no length cap
    pub const fn required() -> Self {
        Self {
            required: true,
            character_count: None,
        }
    }

    /// Not required, with no length cap
    pub const fn optional() -> Self {
        Self {
            required: false,
            character_count: None,
        }
    }

    /// Required and at most `max` characters long
    pub const fn max_chars(max: usize) -> Self {
        Self {
            required: true,
            character_count: Some(max),
        }
    }
}

/// Validate one value against `options`.
///
/// Returns the error message for the first failed constraint, or `None`.
/// Blank means empty after trimming. Length counts characters, not bytes.
pub fn validate(value: &str, options: &ValidationOptions) -> Option<String> {
    if value.trim().is_empty() {
        return options.required.then(|| REQUIRED_MESSAGE.to_string());
    }

    match options.character_count {
        Some(max) if value.chars().count() > max => {
            Some(format!("Must be {} characters or fewer", max))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_required_without_cap() {
        let options = ValidationOptions::default();
        assert!(options.required);
        assert_eq!(options.character_count, None);
    }

    #[test]
    fn test_blank_required_value() {
        let options = ValidationOptions::required();
        assert_eq!(validate("", &options).as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(validate("   \t", &options).as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_blank_optional_value() {
        assert_eq!(validate("", &ValidationOptions::optional()), None);
    }

    #[test]
    fn test_character_count_boundary() {
        let options = ValidationOptions::max_chars(5);
        assert_eq!(validate("12345", &options), None);
        assert_eq!(
            validate("123456", &options).as_deref(),
            Some("Must be 5 characters or fewer")
        );
    }

    #[test]
    fn test_character_count_uses_chars() {
        // five characters, ten bytes
        let options = ValidationOptions::max_chars(5);
        assert_eq!(validate("ééééé", &options), None);
    }

    #[test]
    fn test_optional_value_still_capped() {
        let options = ValidationOptions {
            required: false,
            character_count: Some(3),
        };
        assert!(validate("abcd", &options).is_some());
        assert_eq!(validate("abc", &options), None);
    }
}
