use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Longest name accepted by the relay
pub const MAX_NAME_LEN: u64 = 50;

/// Why a client-supplied name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Pokemon name must contain only letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("Pokemon name must be between 1 and 50 characters")]
    InvalidLength,
}

#[derive(Debug, Validate)]
struct NameCandidate {
    #[validate(length(min = 1, max = 50), custom(function = "validate_name_charset"))]
    name: String,
}

/// Only ASCII letters, digits and hyphens may reach the upstream URL
fn validate_name_charset(name: &str) -> Result<(), ValidationError> {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(ValidationError::new("charset"))
    }
}

/// Lower-case then trim, in that order
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// A normalized name that is safe to interpolate into an upstream path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonName(String);

impl PokemonName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let candidate = NameCandidate { name: normalize_name(raw) };

        match candidate.validate() {
            Ok(()) => Ok(Self(candidate.name)),
            Err(errors) => Err(classify(&errors)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PokemonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PokemonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// A bad character outranks a bad length in the reported reason.
fn classify(errors: &ValidationErrors) -> NameError {
    let field_errors = errors.field_errors();
    let charset_failed = field_errors
        .get("name")
        .map(|errs| errs.iter().any(|e| e.code == "charset"))
        .unwrap_or(false);

    if charset_failed {
        NameError::InvalidCharacters
    } else {
        NameError::InvalidLength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let name = PokemonName::parse("  PikaChu \t").unwrap();
        assert_eq!(name.as_str(), "pikachu");
    }

    #[test]
    fn test_accepts_hyphens_and_digits() {
        assert_eq!(PokemonName::parse("porygon-z").unwrap().as_str(), "porygon-z");
        assert_eq!(PokemonName::parse("25").unwrap().as_str(), "25");
    }

    #[test]
    fn test_length_bounds() {
        let max = "a".repeat(MAX_NAME_LEN as usize);
        assert!(PokemonName::parse(&max).is_ok());

        let too_long = "a".repeat(MAX_NAME_LEN as usize + 1);
        assert_eq!(PokemonName::parse(&too_long), Err(NameError::InvalidLength));
        assert_eq!(PokemonName::parse(""), Err(NameError::InvalidLength));
        assert_eq!(PokemonName::parse("   "), Err(NameError::InvalidLength));
    }

    #[test]
    fn test_rejects_injection_characters() {
        for raw in ["mr.mime", "a/b", "a b", "pika%0d%0a", "x\r\ny", "farfetch'd", "ñandu"] {
            assert_eq!(
                PokemonName::parse(raw),
                Err(NameError::InvalidCharacters),
                "expected {:?} to be rejected",
                raw
            );
        }
    }
}
