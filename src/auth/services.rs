use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Mint an opaque session token. A fresh token replaces whatever the user
/// row held before, so one login invalidates the previous session.
pub fn new_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// Placeholder credential check: passwords are stored and compared as-is.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    plain == stored
}

#[cfg(test)]
mod email_tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let a = new_session_token();
        let b = new_session_token();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn verify_password_is_exact_equality() {
        assert!(verify_password("secret", "secret"));
        assert!(!verify_password("secret", "Secret"));
        assert!(!verify_password("secret", ""));
    }
}
