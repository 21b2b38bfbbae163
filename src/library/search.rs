use super::{Library, NodeId};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const MAX_RESULTS: usize = 1000;

/// One ranked hit. Results arrive already sorted; the rank is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub node: NodeId,
    pub rank: i64,
}

pub trait SearchIndex {
    /// Replaces the current result set.
    fn set_query(&mut self, library: &Library, query: &str);
    fn query(&self) -> &str;
    fn results(&self) -> &[SearchResult];
    /// Bumped every time the result set is replaced.
    fn generation(&self) -> u64;

    fn len(&self) -> usize {
        self.results().len()
    }

    fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

/// Fuzzy search over song names 🔍
#[derive(Default)]
pub struct FuzzyIndex {
    matcher: SkimMatcherV2,
    query: String,
    results: Vec<SearchResult>,
    generation: u64,
}

impl SearchIndex for FuzzyIndex {
    fn set_query(&mut self, library: &Library, query: &str) {
        self.query = query.to_string();
        self.generation += 1;
        self.results.clear();

        let pattern = query.trim();
        if pattern.is_empty() {
            return;
        }

        let mut hits: Vec<SearchResult> = library
            .songs()
            .filter_map(|song| {
                self.matcher
                    .fuzzy_match(&song.name, pattern)
                    .map(|rank| SearchResult { node: song.id, rank })
            })
            .collect();

        // Stable: equal scores keep tree order.
        hits.sort_by(|a, b| b.rank.cmp(&a.rank));
        hits.truncate(MAX_RESULTS);
        self.results = hits;
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn results(&self) -> &[SearchResult] {
        &self.results
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_replaces_results_and_bumps_generation() {
        let mut lib = Library::new("Music", "/music");
        let root = lib.root();
        let dir = lib.add_directory(root, "Floyd");
        let moon = lib.add_song(dir, "Brain Damage (Moon).flac");
        lib.add_song(dir, "Time.flac");

        let mut index = FuzzyIndex::default();
        index.set_query(&lib, "moon");
        assert_eq!(index.generation(), 1);
        assert_eq!(index.len(), 1);
        assert_eq!(index.results()[0].node, moon);

        index.set_query(&lib, "   ");
        assert_eq!(index.generation(), 2);
        assert!(index.is_empty());
        assert_eq!(index.query(), "   ");
    }
}
