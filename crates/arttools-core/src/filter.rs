use crate::models::ArtTool;

/// Brand sentinel that disables brand filtering.
pub const ALL_BRANDS: &str = "All";

/// Narrow the catalog to what the list views should show.
///
/// Pure and order-preserving, so it is safe to recompute on every
/// keystroke. The text query matches case-insensitively as a substring of
/// name, brand or description; an empty or whitespace-only query matches
/// everything. The brand filter is an exact match unless it is
/// [`ALL_BRANDS`]. Both conditions must hold.
pub fn filter_art_tools(items: &[ArtTool], query: &str, brand: &str) -> Vec<ArtTool> {
    let query = query.trim().to_lowercase();

    items
        .iter()
        .filter(|tool| matches_query(tool, &query) && matches_brand(tool, brand))
        .cloned()
        .collect()
}

fn matches_query(tool: &ArtTool, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    tool.art_name.to_lowercase().contains(query)
        || tool.brand.to_lowercase().contains(query)
        || tool.description.to_lowercase().contains(query)
}

fn matches_brand(tool: &ArtTool, brand: &str) -> bool {
    brand == ALL_BRANDS || tool.brand == brand
}

/// Distinct brand values in first-seen order, for the brand filter row.
pub fn brand_facets(items: &[ArtTool]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for tool in items {
        if !brands.iter().any(|b| b == &tool.brand) {
            brands.push(tool.brand.clone());
        }
    }
    brands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str, name: &str, brand: &str, description: &str) -> ArtTool {
        ArtTool {
            id: id.to_string(),
            art_name: name.to_string(),
            description: description.to_string(),
            price: 1.0,
            glass_surface: false,
            image: String::new(),
            brand: brand.to_string(),
            limited_time_deal: None,
            feedbacks: Vec::new(),
        }
    }

    fn sample() -> Vec<ArtTool> {
        vec![
            tool("1", "Pencil", "Faber", "Classic graphite pencil"),
            tool("2", "Crayon", "Conte", "Wax crayon for sketching"),
            tool("3", "Marker", "Faber", "Alcohol-based marker"),
        ]
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_art_tools(&[], "", ALL_BRANDS).is_empty());
    }

    #[test]
    fn no_filters_is_identity() {
        let items = sample();
        assert_eq!(filter_art_tools(&items, "", ALL_BRANDS), items);
        // Whitespace-only queries don't filter either
        assert_eq!(filter_art_tools(&items, "   ", ALL_BRANDS), items);
    }

    #[test]
    fn query_matches_case_insensitively() {
        let items = sample();

        let hits = filter_art_tools(&items, "FABER", ALL_BRANDS);
        assert_eq!(hits.len(), 2);

        let hits = filter_art_tools(&items, "cray", ALL_BRANDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn query_matches_description_too() {
        let items = sample();
        let hits = filter_art_tools(&items, "graphite", ALL_BRANDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn brand_filter_is_exact() {
        let items = sample();

        let hits = filter_art_tools(&items, "", "Faber");
        assert_eq!(hits.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);

        // Brand matching is exact, not case-insensitive
        assert!(filter_art_tools(&items, "", "faber").is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let items = sample();

        let hits = filter_art_tools(&items, "marker", "Faber");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        assert!(filter_art_tools(&items, "crayon", "Faber").is_empty());
    }

    #[test]
    fn original_order_is_preserved() {
        let items = sample();
        let hits = filter_art_tools(&items, "", "Faber");
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn brand_facets_keep_first_seen_order() {
        let items = sample();
        assert_eq!(brand_facets(&items), vec!["Faber", "Conte"]);
        assert!(brand_facets(&[]).is_empty());
    }
}
