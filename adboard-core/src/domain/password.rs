use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("password is too short")]
    TooShort,
    #[error("password is too long")]
    TooLong,
    #[error("password must contain an uppercase letter, a lowercase letter, a digit and a symbol")]
    ComplexityUnmet,
}

/// A cleartext password that has passed the complexity policy.
///
/// Only ever constructed at the signup boundary; everywhere else the
/// password travels as its argon2 hash.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        validate(value.expose_secret())?;
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Length is checked before complexity; the first failing rule is reported.
fn validate(raw: &str) -> Result<(), PasswordError> {
    let length = raw.chars().count();
    if length < MIN_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(PasswordError::TooLong);
    }

    let has_uppercase = raw.chars().any(char::is_uppercase);
    let has_lowercase = raw.chars().any(char::is_lowercase);
    let has_digit = raw.chars().any(char::is_numeric);
    // Any non-alphanumeric, non-whitespace code point counts as a symbol,
    // multibyte symbols included.
    let has_symbol = raw
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if has_uppercase && has_lowercase && has_digit && has_symbol {
        Ok(())
    } else {
        Err(PasswordError::ComplexityUnmet)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn parse(raw: &str) -> Result<Password, PasswordError> {
        Password::try_from(Secret::new(raw.to_string()))
    }

    #[test]
    fn accepts_compliant_password() {
        assert!(parse("Valid1@Password").is_ok());
    }

    #[test]
    fn accepts_boundary_lengths() {
        // Exactly 8 and exactly 32 code points.
        assert!(parse("Aa1@bcde").is_ok());
        assert!(parse("Aa1@bcdefghijklmnopqrstuvwxyz012").is_ok());
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(parse("Aa1@bcd").unwrap_err(), PasswordError::TooShort);
        assert_eq!(parse("short").unwrap_err(), PasswordError::TooShort);
        assert_eq!(parse("").unwrap_err(), PasswordError::TooShort);
    }

    #[test]
    fn rejects_long_password() {
        let long = format!("Aa1@{}", "x".repeat(29));
        assert_eq!(parse(&long).unwrap_err(), PasswordError::TooLong);
    }

    #[test]
    fn length_is_checked_before_complexity() {
        // Fails both rules; the length error wins.
        assert_eq!(parse("abc").unwrap_err(), PasswordError::TooShort);
        let long = "a".repeat(40);
        assert_eq!(parse(&long).unwrap_err(), PasswordError::TooLong);
    }

    #[test]
    fn rejects_missing_character_classes() {
        for raw in [
            "alllower1@", // no uppercase
            "ALLUPPER1@", // no lowercase
            "NoDigits!@", // no digit
            "NoSymbol12", // no symbol
        ] {
            assert_eq!(
                parse(raw).unwrap_err(),
                PasswordError::ComplexityUnmet,
                "expected {raw} to fail complexity"
            );
        }
    }

    #[test]
    fn multibyte_symbol_satisfies_the_symbol_rule() {
        assert!(parse("Aa1€bcde").is_ok());
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 8 code points, more than 8 bytes.
        assert!(parse("Aa1€€€€€").is_ok());
    }

    // The policy is total: every input yields exactly one verdict, no panic.
    #[quickcheck]
    fn validate_never_panics(raw: String) -> bool {
        match validate(&raw) {
            Ok(())
            | Err(PasswordError::TooShort)
            | Err(PasswordError::TooLong)
            | Err(PasswordError::ComplexityUnmet) => true,
        }
    }
}
