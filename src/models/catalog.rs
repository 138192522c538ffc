use std::collections::HashMap;

/// The authoritative list of known movie titles and their stable row indices.
///
/// Built once at startup from the movie store and immutable afterwards. Each
/// title maps to exactly one dense 0-based row index into the similarity
/// matrix, and that index is stable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    titles: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from titles in row order.
    ///
    /// Fails if the same title appears twice, since a duplicate would leave
    /// the title pointing at two different similarity rows.
    pub fn from_titles(titles: Vec<String>) -> anyhow::Result<Self> {
        let mut index = HashMap::with_capacity(titles.len());
        for (row, title) in titles.iter().enumerate() {
            if index.insert(title.clone(), row).is_some() {
                anyhow::bail!("Duplicate title in catalog: {}", title);
            }
        }
        Ok(Self { titles, index })
    }

    /// Row index for a title, exact match
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    /// Title at a row index
    pub fn title_at(&self, row: usize) -> Option<&str> {
        self.titles.get(row).map(String::as_str)
    }

    /// Number of titles in the catalog
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
