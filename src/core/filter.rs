use crate::models::ListingEntry;

/// Case-insensitive substring filter over listing names
///
/// The query is trimmed first; an empty query keeps every entry. Upstream
/// order is preserved.
pub fn filter_listing<'a>(entries: &'a [ListingEntry], query: &str) -> Vec<&'a ListingEntry> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", name),
        }
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let entries = vec![entry("bulbasaur"), entry("ivysaur")];
        assert_eq!(filter_listing(&entries, "  ").len(), 2);
    }

    #[test]
    fn test_matches_substring_ignoring_case() {
        let entries = vec![entry("bulbasaur"), entry("charmander"), entry("ivysaur")];
        let names: Vec<_> = filter_listing(&entries, "SAUR")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }
}
