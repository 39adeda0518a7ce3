/// Breed search
///
/// The search string is the only piece of user-entered state on the page.
/// The visible breed list is never stored; it is derived from the string
/// on every render.

use super::data::BreedRecord;

/// Current contents of the search field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    /// Replace the query with the raw input value (no trimming)
    pub fn set_query(&mut self, value: String) {
        self.query = value;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Breeds visible for the current query
    pub fn visible<'a>(&self, breeds: &'a [BreedRecord]) -> Vec<&'a BreedRecord> {
        filter_breeds(breeds, &self.query)
    }
}

/// Return the breeds whose name contains `query`, ignoring case.
///
/// Order is preserved and an empty query matches everything.
pub fn filter_breeds<'a>(breeds: &'a [BreedRecord], query: &str) -> Vec<&'a BreedRecord> {
    let needle = query.to_lowercase();
    breeds
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&needle))
        .collect()
}
