//! The melon catalog store.

use std::collections::HashMap;
use std::path::Path;

use ubermelon_core::{Melon, MelonId, Price};

use super::{LoadError, NotFoundError, read_records, split_record};

/// Number of fields in a catalog record: `id|name|price|image_url`.
const CATALOG_FIELDS: usize = 4;

/// In-memory melon catalog, keyed by id, iterated in file order.
///
/// Built once at startup by [`CatalogStore::load`] and never mutated
/// afterwards.
#[derive(Debug, Default)]
pub struct CatalogStore {
    melons: HashMap<MelonId, Melon>,
    order: Vec<MelonId>,
}

impl CatalogStore {
    /// Load the catalog from a pipe-delimited file.
    ///
    /// On a duplicate id the later record wins, keeping the position of the
    /// first occurrence in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on I/O failure, wrong field count, or an
    /// unparseable id or price. The first bad record aborts the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut store = Self::default();

        for (line, record) in read_records(path)? {
            let fields = split_record(path, line, &record, CATALOG_FIELDS)?;

            let id: MelonId = fields[0].trim().parse().map_err(|_| LoadError::InvalidId {
                path: path.to_path_buf(),
                line,
                value: fields[0].to_owned(),
            })?;

            let price = Price::parse(fields[2]).map_err(|source| LoadError::InvalidPrice {
                path: path.to_path_buf(),
                line,
                value: fields[2].to_owned(),
                source,
            })?;

            store.insert(Melon {
                id,
                name: fields[1].to_owned(),
                price,
                image_url: fields[3].to_owned(),
            });
        }

        tracing::debug!(melons = store.len(), path = %path.display(), "catalog loaded");
        Ok(store)
    }

    fn insert(&mut self, melon: Melon) {
        let id = melon.id;
        if self.melons.insert(id, melon).is_none() {
            self.order.push(id);
        }
    }

    /// All melons in catalog-file order.
    pub fn get_all(&self) -> impl Iterator<Item = &Melon> {
        self.order.iter().filter_map(|id| self.melons.get(id))
    }

    /// Look up a melon by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Melon`] if the id is not in the catalog.
    pub fn get(&self, id: MelonId) -> Result<&Melon, NotFoundError> {
        self.melons.get(&id).ok_or(NotFoundError::Melon(id))
    }

    /// Look up a melon by a raw request parameter.
    ///
    /// The raw string is coerced to a catalog key first; a value that is not
    /// a non-negative integer yields the same not-found outcome as an unknown
    /// id, never a panic.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::InvalidMelonId`] if the parameter does not
    /// parse, or [`NotFoundError::Melon`] if it parses but is unknown.
    pub fn get_by_param(&self, raw: &str) -> Result<&Melon, NotFoundError> {
        let id: MelonId = raw
            .parse()
            .map_err(|_| NotFoundError::InvalidMelonId(raw.to_owned()))?;
        self.get(id)
    }

    /// Number of melons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.melons.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melons.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const WELL_FORMED: &str = "\
2|Crenshaw|2.00|/static/images/melons/crenshaw.png
14|Ali Baba Watermelon|2.50|/static/images/melons/ali-baba.png
21|Chris Cross Watermelon|2.50|/static/images/melons/chris-cross.png
";

    #[test]
    fn test_load_well_formed() {
        let file = catalog_file(WELL_FORMED);
        let store = CatalogStore::load(file.path()).unwrap();

        assert_eq!(store.len(), 3);

        let melon = store.get(MelonId::new(14)).unwrap();
        assert_eq!(melon.name, "Ali Baba Watermelon");
        assert_eq!(melon.price.to_string(), "$2.50");
        assert_eq!(melon.image_url, "/static/images/melons/ali-baba.png");
    }

    #[test]
    fn test_get_all_in_file_order() {
        let file = catalog_file(WELL_FORMED);
        let store = CatalogStore::load(file.path()).unwrap();

        let ids: Vec<u32> = store.get_all().map(|m| m.id.as_u32()).collect();
        assert_eq!(ids, vec![2, 14, 21]);
    }

    #[test]
    fn test_load_empty_file() {
        let file = catalog_file("");
        let store = CatalogStore::load(file.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_tolerates_trailing_blank_line() {
        let file = catalog_file("2|Crenshaw|2.00|/img/crenshaw.png\n\n");
        let store = CatalogStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_rejects_wrong_field_count() {
        let file = catalog_file("2|Crenshaw|2.00\n");
        let err = CatalogStore::load(file.path()).unwrap_err();
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
    fn test_load_rejects_bad_id() {
        let file = catalog_file("two|Crenshaw|2.00|/img/crenshaw.png\n");
        let err = CatalogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidId { line: 1, .. }));
    }

    #[test]
    fn test_load_rejects_bad_price() {
        let file = catalog_file("2|Crenshaw|cheap|/img/crenshaw.png\n");
        let err = CatalogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPrice { line: 1, .. }));
    }

    #[test]
    fn test_load_rejects_negative_price() {
        let file = catalog_file("2|Crenshaw|-2.00|/img/crenshaw.png\n");
        let err = CatalogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPrice { line: 1, .. }));
    }

    #[test]
    fn test_bad_line_aborts_whole_load() {
        // First record is fine, second is malformed: no partial store.
        let file = catalog_file("2|Crenshaw|2.00|/img/crenshaw.png\nbroken\n");
        assert!(CatalogStore::load(file.path()).is_err());
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let file = catalog_file(
            "2|Crenshaw|2.00|/img/a.png\n14|Ali Baba|2.50|/img/b.png\n2|Crenshaw Revised|3.00|/img/c.png\n",
        );
        let store = CatalogStore::load(file.path()).unwrap();

        assert_eq!(store.len(), 2);
        let melon = store.get(MelonId::new(2)).unwrap();
        assert_eq!(melon.name, "Crenshaw Revised");

        // Still iterates at the slot of the first occurrence.
        let ids: Vec<u32> = store.get_all().map(|m| m.id.as_u32()).collect();
        assert_eq!(ids, vec![2, 14]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CatalogStore::load("/nonexistent/melons.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_get_unknown_id() {
        let file = catalog_file(WELL_FORMED);
        let store = CatalogStore::load(file.path()).unwrap();

        assert_eq!(
            store.get(MelonId::new(999)),
            Err(NotFoundError::Melon(MelonId::new(999)))
        );
    }

    #[test]
    fn test_get_by_param() {
        let file = catalog_file(WELL_FORMED);
        let store = CatalogStore::load(file.path()).unwrap();

        assert!(store.get_by_param("14").is_ok());
        assert_eq!(
            store.get_by_param("999"),
            Err(NotFoundError::Melon(MelonId::new(999)))
        );
        assert_eq!(
            store.get_by_param("banana"),
            Err(NotFoundError::InvalidMelonId("banana".to_owned()))
        );
    }

    #[test]
    fn test_round_trip_prices() {
        let file = catalog_file(WELL_FORMED);
        let store = CatalogStore::load(file.path()).unwrap();

        for melon in store.get_all() {
            let formatted = melon.price.to_string();
            let reparsed = Price::parse(formatted.trim_start_matches('$')).unwrap();
            assert_eq!(reparsed.amount(), melon.price.amount());
        }
    }
}
