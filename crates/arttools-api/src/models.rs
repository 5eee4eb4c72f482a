use serde::Deserialize;

/// Catalog item exactly as the remote API ships it.
///
/// Field names are camelCase on the wire. Anything beyond `id`, `artName`,
/// `price` and `brand` is treated as optional because the hosted catalog
/// has been sloppy about older records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtToolRecord {
    pub id: String,
    pub art_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub glass_surface: bool,
    #[serde(default)]
    pub image: String,
    pub brand: String,
    #[serde(default)]
    pub limited_time_deal: Option<LimitedTimeDeal>,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackRecord>,
}

/// The deal field shipped in two shapes across catalog revisions:
/// a plain flag in the first one, a fractional discount rate later.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LimitedTimeDeal {
    Flag(bool),
    Rate(f64),
}

/// A single customer feedback entry attached to a catalog item.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRecord {
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_deal_revision() {
        let json = r#"{
            "id": "1",
            "artName": "Watercolor Pencil",
            "description": "Soft core",
            "price": 8.99,
            "glassSurface": false,
            "image": "https://example.com/p.png",
            "brand": "Faber",
            "limitedTimeDeal": true,
            "feedbacks": [
                {"rating": 5, "comment": "Great", "author": "An", "date": "2024-01-15"}
            ]
        }"#;

        let record: ArtToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.art_name, "Watercolor Pencil");
        assert_eq!(record.limited_time_deal, Some(LimitedTimeDeal::Flag(true)));
        assert_eq!(record.feedbacks.len(), 1);
        assert_eq!(record.feedbacks[0].rating, 5);
    }

    #[test]
    fn parses_fractional_deal_revision() {
        let json = r#"{
            "id": "2",
            "artName": "Oil Pastel",
            "price": 12.5,
            "brand": "Conte",
            "limitedTimeDeal": 0.25
        }"#;

        let record: ArtToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.limited_time_deal, Some(LimitedTimeDeal::Rate(0.25)));
        // Omitted optional fields fall back to defaults
        assert_eq!(record.description, "");
        assert!(!record.glass_surface);
        assert!(record.feedbacks.is_empty());
    }

    #[test]
    fn parses_record_without_deal_field() {
        let json = r#"{"id": "3", "artName": "Brush", "price": 3.0, "brand": "Daler"}"#;

        let record: ArtToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.limited_time_deal, None);
    }
}
