//! The customer store.

use std::collections::HashMap;
use std::path::Path;

use ubermelon_core::{Customer, Email};

use super::{LoadError, NotFoundError, read_records, split_record};

/// Number of fields in a customer record:
/// `first_name|last_name|email|password`.
const CUSTOMER_FIELDS: usize = 4;

/// In-memory customer directory, keyed by email, iterated in file order.
///
/// Emails are compared case-sensitively, exactly as stored in the file.
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: HashMap<Email, Customer>,
    order: Vec<Email>,
}

impl CustomerStore {
    /// Load customers from a pipe-delimited file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on I/O failure, wrong field count, or a
    /// structurally invalid email. The first bad record aborts the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut store = Self::default();

        for (line, record) in read_records(path)? {
            let fields = split_record(path, line, &record, CUSTOMER_FIELDS)?;

            let email = Email::parse(fields[2]).map_err(|source| LoadError::InvalidEmail {
                path: path.to_path_buf(),
                line,
                value: fields[2].to_owned(),
                source,
            })?;

            store.insert(Customer {
                first_name: fields[0].to_owned(),
                last_name: fields[1].to_owned(),
                email,
                password: fields[3].to_owned(),
            });
        }

        tracing::debug!(customers = store.len(), path = %path.display(), "customers loaded");
        Ok(store)
    }

    fn insert(&mut self, customer: Customer) {
        let email = customer.email.clone();
        if self.customers.insert(email.clone(), customer).is_none() {
            self.order.push(email);
        }
    }

    /// All customers in customer-file order.
    pub fn get_all(&self) -> impl Iterator<Item = &Customer> {
        self.order.iter().filter_map(|email| self.customers.get(email.as_str()))
    }

    /// Look up a customer by email.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Customer`] if no customer has this email.
    pub fn get(&self, email: &str) -> Result<&Customer, NotFoundError> {
        self.customers
            .get(email)
            .ok_or_else(|| NotFoundError::Customer(email.to_owned()))
    }

    /// Whether a customer with this email exists.
    ///
    /// The login flow uses this to tell "unknown email" apart from "known
    /// email, wrong password" without going through an error.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.customers.contains_key(email)
    }

    /// Number of customers in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn customer_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const WELL_FORMED: &str = "\
Ada|Lovelace|ada@example.com|analytical-engine
Grace|Hopper|grace@example.com|nanoseconds
";

    #[test]
    fn test_load_well_formed() {
        let file = customer_file(WELL_FORMED);
        let store = CustomerStore::load(file.path()).unwrap();

        assert_eq!(store.len(), 2);

        let customer = store.get("ada@example.com").unwrap();
        assert_eq!(customer.first_name, "Ada");
        assert_eq!(customer.last_name, "Lovelace");
        assert_eq!(customer.password, "analytical-engine");
    }

    #[test]
    fn test_get_all_in_file_order() {
        let file = customer_file(WELL_FORMED);
        let store = CustomerStore::load(file.path()).unwrap();

        let names: Vec<&str> = store.get_all().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn test_load_rejects_wrong_field_count() {
        let file = customer_file("Ada|Lovelace|ada@example.com\n");
        let err = CustomerStore::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::FieldCount {
                line: 1,
                expected: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_invalid_email() {
        let file = customer_file("Ada|Lovelace|not-an-email|pw\n");
        let err = CustomerStore::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidEmail { line: 1, .. }));
    }

    #[test]
    fn test_bad_line_aborts_whole_load() {
        let file = customer_file("Ada|Lovelace|ada@example.com|pw\nbroken line\n");
        assert!(CustomerStore::load(file.path()).is_err());
    }

    #[test]
    fn test_contains() {
        let file = customer_file(WELL_FORMED);
        let store = CustomerStore::load(file.path()).unwrap();

        assert!(store.contains("ada@example.com"));
        assert!(!store.contains("nobody@example.com"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let file = customer_file(WELL_FORMED);
        let store = CustomerStore::load(file.path()).unwrap();

        assert!(!store.contains("ADA@EXAMPLE.COM"));
        assert!(store.get("Ada@example.com").is_err());
    }

    #[test]
    fn test_get_unknown_email() {
        let file = customer_file(WELL_FORMED);
        let store = CustomerStore::load(file.path()).unwrap();

        assert_eq!(
            store.get("nobody@example.com"),
            Err(NotFoundError::Customer("nobody@example.com".to_owned()))
        );
    }
}
