//! The customer record.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Email;

/// A registered customer from the customer file.
///
/// The password is stored and compared as plaintext to keep login behavior
/// identical to the data files this shop ships with. That is fine for a demo
/// catalog and nothing else; see the auth service docs before reusing this
/// anywhere real. `Debug` redacts the password so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Store key, unique within the customer file, case-sensitive.
    pub email: Email,
    /// Plaintext password, compared literally at login.
    pub password: String,
}

impl Customer {
    /// Full display name, e.g. "Ada Lovelace".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Email::parse("ada@example.com").unwrap(),
            password: "super-secret".to_string(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug_output = format!("{:?}", sample());
        assert!(debug_output.contains("ada@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret"));
    }
}
