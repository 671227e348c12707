//! Product catalog loading.
//!
//! The catalog lives in one JSON array per category inside a data
//! directory (`mice.json`, `keyboards.json`, `audio.json`,
//! `monitors.json`). Records are parsed into typed products for scoring
//! and kept as raw JSON for listing and search responses, so fields the
//! typed model does not know about still reach clients.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{AudioProduct, Category, KeyboardProduct, MonitorProduct, MouseProduct};
use crate::search::SearchIndex;
use crate::validation::{self, ValidationError};

/// All products, typed and raw.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub mice: Vec<MouseProduct>,
    pub audio: Vec<AudioProduct>,
    pub keyboards: Vec<KeyboardProduct>,
    pub monitors: Vec<MonitorProduct>,
    raw: [Vec<Value>; 4],
}

impl Catalog {
    /// Loads every category file from `dir`.
    ///
    /// # Errors
    /// [`Error::Io`] or [`Error::Json`] naming the first file that cannot
    /// be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading catalog from {}", dir.display());

        let mut catalog = Catalog::default();
        for category in Category::ALL {
            let path = dir.join(category.file_name());
            let raw = read_records(&path)?;
            match category {
                Category::Mouse => catalog.mice = typed(&path, &raw)?,
                Category::Audio => catalog.audio = typed(&path, &raw)?,
                Category::Keyboard => catalog.keyboards = typed(&path, &raw)?,
                Category::Monitor => catalog.monitors = typed(&path, &raw)?,
            }
            debug!("Loaded {} {} products", raw.len(), category);
            catalog.raw[slot(category)] = raw;
        }

        info!("Catalog loaded: {} products", catalog.len());
        Ok(catalog)
    }

    /// Builds a catalog from typed products, deriving the raw records.
    pub fn from_products(
        mice: Vec<MouseProduct>,
        audio: Vec<AudioProduct>,
        keyboards: Vec<KeyboardProduct>,
        monitors: Vec<MonitorProduct>,
    ) -> Result<Self> {
        let raw = [
            to_raw(&mice)?,
            to_raw(&audio)?,
            to_raw(&keyboards)?,
            to_raw(&monitors)?,
        ];
        Ok(Self {
            mice,
            audio,
            keyboards,
            monitors,
            raw,
        })
    }

    /// Loads the catalog and rejects it when any record is invalid.
    ///
    /// # Errors
    /// As [`Catalog::load`], plus [`Error::InvalidCatalog`] listing every
    /// problem found.
    pub fn load_validated(dir: impl AsRef<Path>) -> Result<Self> {
        let catalog = Self::load(dir)?;
        catalog.validate().map_err(Error::InvalidCatalog)?;
        Ok(catalog)
    }

    /// Runs the catalog checks over every category.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let checks = [
            validation::validate_products(Category::Mouse, &self.mice),
            validation::validate_products(Category::Audio, &self.audio),
            validation::validate_products(Category::Keyboard, &self.keyboards),
            validation::validate_monitors(&self.monitors),
        ];
        for check in checks {
            if let Err(mut found) = check {
                errors.append(&mut found);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Raw JSON records of one category, in file order.
    pub fn raw(&self, category: Category) -> &[Value] {
        &self.raw[slot(category)]
    }

    /// Raw records of every category, in [`Category::ALL`] order.
    pub fn all_raw(&self) -> impl Iterator<Item = &Value> {
        Category::ALL.into_iter().flat_map(|c| self.raw(c).iter())
    }

    /// Number of products in one category.
    pub fn count(&self, category: Category) -> usize {
        self.raw(category).len()
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.raw.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ranked search index over every product.
    pub fn search_index(&self) -> SearchIndex {
        let mut index = SearchIndex::new();
        index.extend(&self.mice);
        index.extend(&self.keyboards);
        index.extend(&self.audio);
        index.extend(&self.monitors);
        index
    }
}

fn slot(category: Category) -> usize {
    match category {
        Category::Mouse => 0,
        Category::Audio => 1,
        Category::Keyboard => 2,
        Category::Monitor => 3,
    }
}

fn read_records(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| json_error(path, source))
}

fn typed<T: DeserializeOwned>(path: &Path, raw: &[Value]) -> Result<Vec<T>> {
    raw.iter()
        .map(|record| T::deserialize(record).map_err(|source| json_error(path, source)))
        .collect()
}

fn to_raw<T: serde::Serialize>(products: &[T]) -> Result<Vec<Value>> {
    products
        .iter()
        .map(|p| serde_json::to_value(p).map_err(Error::Encode))
        .collect()
}

fn json_error(path: &Path, source: serde_json::Error) -> Error {
    Error::Json {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "gearmatch-catalog-{name}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write<T: serde::Serialize>(&self, category: Category, records: &[T]) {
            let text = serde_json::to_string(records).unwrap();
            fs::write(self.0.join(category.file_name()), text).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn write_catalog(dir: &TempDir) {
        let mouse = MouseProduct::new("viper-v3-pro", Category::Mouse)
            .with_name("Viper V3 Pro")
            .with_brand("Razer")
            .with_price(140.0, 160.0)
            .with_tag("esports");
        dir.write(Category::Mouse, &[mouse]);

        let keyboard = KeyboardProduct::new("wooting-60he", Category::Keyboard)
            .with_name("60HE+")
            .with_brand("Wooting")
            .with_price(175.0, 200.0);
        dir.write(Category::Keyboard, &[keyboard]);

        let headset = AudioProduct::new("cloud-iii", Category::Audio)
            .with_name("Cloud III")
            .with_brand("HyperX")
            .with_price(80.0, 100.0);
        dir.write(Category::Audio, &[headset]);

        dir.write::<MonitorProduct>(Category::Monitor, &[]);
    }

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new("load");
        write_catalog(&dir);

        let catalog = Catalog::load(&dir.0).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.mice[0].brand, "Razer");
        assert_eq!(catalog.count(Category::Monitor), 0);
        assert_eq!(catalog.raw(Category::Keyboard)[0]["id"], "wooting-60he");
        assert_eq!(catalog.all_raw().count(), 3);
        assert_eq!(catalog.search_index().len(), 3);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = TempDir::new("missing");
        dir.write::<MouseProduct>(Category::Mouse, &[]);

        let err = Catalog::load(&dir.0).unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("keyboards.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = TempDir::new("malformed");
        write_catalog(&dir);
        fs::write(dir.0.join("monitors.json"), "[{\"id\": 3}]").unwrap();

        let err = Catalog::load(&dir.0).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("monitors.json"));
    }

    #[test]
    fn test_load_validated_rejects_bad_records() {
        let dir = TempDir::new("invalid");
        write_catalog(&dir);
        let bad = MouseProduct::new("", Category::Keyboard).with_price(50.0, 10.0);
        dir.write(Category::Mouse, &[bad]);

        let err = Catalog::load_validated(&dir.0).unwrap_err();
        match err {
            Error::InvalidCatalog(errors) => assert!(errors.len() >= 4),
            other => panic!("unexpected error: {other}"),
        }
    }
}
