//! Monster Search Index
//!
//! Name-sorted listing of every monster with case-insensitive substring
//! search over names and slugs, sliced by offset/limit.

use serde::Serialize;

use crate::data::Dataset;

/// Default page size when the caller gives no limit
pub const DEFAULT_LIMIT: i64 = 9999;

/// Reference to a monster in the index
#[derive(Debug, Clone, Serialize)]
pub struct MonsterRef {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub api_url: String,
}

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<'a> {
    pub count: usize,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub items: Vec<&'a MonsterRef>,
}

/// Index over all monsters, sorted by name
pub struct SearchIndex {
    monsters: Vec<MonsterRef>,
    /// Lowercased (name, slug) per entry, same order as `monsters`
    terms: Vec<(String, String)>,
}

impl SearchIndex {
    /// Build search index from the dataset at startup
    pub fn build(dataset: &Dataset) -> Self {
        let start = std::time::Instant::now();

        let mut monsters: Vec<MonsterRef> = dataset
            .monsters
            .iter()
            .map(|m| MonsterRef {
                name: m.name.clone(),
                slug: m.slug.clone(),
                url: m.url.clone(),
                api_url: format!("/monster?name={}", urlencoding::encode(&m.slug)),
            })
            .collect();
        monsters.sort_by(|a, b| a.name.cmp(&b.name));

        let terms = monsters
            .iter()
            .map(|m| (m.name.to_lowercase(), m.slug.to_lowercase()))
            .collect();

        tracing::info!(
            "Monster index built in {:?} ({} monsters)",
            start.elapsed(),
            monsters.len()
        );

        Self { monsters, terms }
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Substring search with offset/limit slicing.
    ///
    /// An empty query lists everything. `limit < 1` becomes 1 and a negative
    /// offset becomes 0.
    pub fn search(&self, query: &str, offset: i64, limit: i64) -> SearchPage<'_> {
        let limit = limit.max(1) as usize;
        let offset = offset.max(0) as usize;
        let query = query.trim().to_lowercase();

        let matches: Vec<&MonsterRef> = if query.is_empty() {
            self.monsters.iter().collect()
        } else {
            self.monsters
                .iter()
                .zip(&self.terms)
                .filter(|(_, (name, slug))| name.contains(&query) || slug.contains(&query))
                .map(|(m, _)| m)
                .collect()
        };

        let total = matches.len();
        let items: Vec<&MonsterRef> = matches.into_iter().skip(offset).take(limit).collect();

        SearchPage {
            count: items.len(),
            total,
            offset,
            limit,
            items,
        }
    }
}
