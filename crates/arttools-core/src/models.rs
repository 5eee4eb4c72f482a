use serde::{Deserialize, Deserializer, Serialize};

/// Discount rate assumed for items persisted by the old catalog revision,
/// where `limitedTimeDeal` was a bare boolean with no rate attached.
pub const LEGACY_DEAL_RATE: f64 = 0.1;

/// A single catalog entry. Items come from the remote source and are
/// never mutated here; they pass through the favorites core as opaque
/// values keyed by `id`.
///
/// Serialized form (storage and wire) uses the original camelCase names.
/// `limitedTimeDeal` is canonically an optional fractional discount in
/// (0, 1]; deserialization still accepts the legacy boolean shape and
/// upgrades it on the next write-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtTool {
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
    #[serde(default, deserialize_with = "deserialize_deal")]
    pub limited_time_deal: Option<f64>,
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
}

/// Customer feedback attached to an item. The date is free text from the
/// remote source and is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
}

impl ArtTool {
    pub fn has_deal(&self) -> bool {
        self.limited_time_deal.map_or(false, |rate| rate > 0.0)
    }

    /// Mean feedback rating, or `None` when there is no feedback yet.
    pub fn average_rating(&self) -> Option<f64> {
        if self.feedbacks.is_empty() {
            return None;
        }
        let sum: u32 = self.feedbacks.iter().map(|f| u32::from(f.rating)).sum();
        Some(f64::from(sum) / self.feedbacks.len() as f64)
    }
}

/// Accept both observed shapes of `limitedTimeDeal` and normalize to the
/// canonical optional rate: absent/null/false => None, true => the legacy
/// rate, a fraction => itself when positive (capped at 1.0).
fn deserialize_deal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Rate(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None | Some(Raw::Flag(false)) => None,
        Some(Raw::Flag(true)) => Some(LEGACY_DEAL_RATE),
        Some(Raw::Rate(rate)) if rate > 0.0 => Some(rate.min(1.0)),
        Some(Raw::Rate(_)) => None,
    })
}
