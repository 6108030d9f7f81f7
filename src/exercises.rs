use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::error::{Error, Result};

static CATALOG_DIR: Dir = include_dir!("src/catalog");

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub description: String,
    pub duration_secs: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Catalog {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Catalog {
    /// The exercise list shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::load("exercises.json")
    }

    fn load(file_name: &str) -> Result<Self> {
        let file = CATALOG_DIR
            .get_file(file_name)
            .ok_or_else(|| Error::MissingAsset(file_name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::MissingAsset(file_name.to_string()))?;
        Ok(serde_json::from_str(contents)?)
    }
}

/// Scroll position on the exercise list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCursor {
    pub selected: usize,
}

impl CatalogCursor {
    pub fn down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.name, "bodyweight");
        assert_eq!(catalog.exercises.len(), 6);
        assert_eq!(catalog.exercises[0].name, "Push up");
        assert!(catalog.exercises.iter().all(|e| e.duration_secs > 0));
    }

    #[test]
    fn test_missing_catalog() {
        assert!(matches!(
            Catalog::load("nope.json"),
            Err(Error::MissingAsset(_))
        ));
    }

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"{"name":"t","exercises":[{"name":"a","description":"b","duration_secs":3}]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.exercises[0].duration_secs, 3);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = CatalogCursor::default();
        cursor.up();
        assert_eq!(cursor.selected, 0);
        cursor.down(2);
        cursor.down(2);
        assert_eq!(cursor.selected, 1);
        cursor.down(0);
        assert_eq!(cursor.selected, 1);
    }
}
