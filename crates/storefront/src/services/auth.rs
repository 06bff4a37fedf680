//! Credential checking against the customer store.
//!
//! Passwords in the customer file are plaintext and login is a literal string
//! comparison. That matches the data this shop ships with and keeps login
//! outcomes byte-for-byte reproducible, but it is not suitable for any real
//! deployment; introducing hashing would change observable behavior for the
//! stored records, so it is deliberately not done here.
//!
//! The two failure cases are distinct on purpose: the login page tells
//! "unknown email" apart from "known email, wrong password", mirroring the
//! original site's (debatable) choice to leak which one happened.

use thiserror::Error;

use ubermelon_core::Customer;

use crate::store::CustomerStore;

/// Login failure, one variant per user-visible reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No customer with this email exists.
    #[error("no customer with email {0:?}")]
    UnknownEmail(String),

    /// The email exists but the password does not match.
    #[error("incorrect password for {0:?}")]
    BadPassword(String),
}

/// Check login credentials against the customer store.
///
/// # Errors
///
/// Returns [`AuthError::UnknownEmail`] if no customer has this email, or
/// [`AuthError::BadPassword`] if the password differs from the stored one.
pub fn authenticate<'a>(
    customers: &'a CustomerStore,
    email: &str,
    password: &str,
) -> Result<&'a Customer, AuthError> {
    if !customers.contains(email) {
        return Err(AuthError::UnknownEmail(email.to_owned()));
    }

    let customer = customers
        .get(email)
        .map_err(|_| AuthError::UnknownEmail(email.to_owned()))?;

    if customer.password != password {
        return Err(AuthError::BadPassword(email.to_owned()));
    }

    Ok(customer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn store() -> (NamedTempFile, CustomerStore) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Ada|Lovelace|ada@example.com|analytical-engine\n")
            .unwrap();
        let store = CustomerStore::load(file.path()).unwrap();
        (file, store)
    }

    #[test]
    fn test_correct_credentials() {
        let (_file, store) = store();
        let customer = authenticate(&store, "ada@example.com", "analytical-engine").unwrap();
        assert_eq!(customer.first_name, "Ada");
    }

    #[test]
    fn test_unknown_email() {
        let (_file, store) = store();
        assert_eq!(
            authenticate(&store, "nobody@example.com", "whatever"),
            Err(AuthError::UnknownEmail("nobody@example.com".to_owned()))
        );
    }

    #[test]
    fn test_bad_password() {
        let (_file, store) = store();
        assert_eq!(
            authenticate(&store, "ada@example.com", "difference-engine"),
            Err(AuthError::BadPassword("ada@example.com".to_owned()))
        );
    }

    #[test]
    fn test_password_comparison_is_exact() {
        // No trimming, no case folding: the comparison is literal.
        let (_file, store) = store();
        assert!(authenticate(&store, "ada@example.com", "Analytical-Engine").is_err());
        assert!(authenticate(&store, "ada@example.com", "analytical-engine ").is_err());
    }
}
