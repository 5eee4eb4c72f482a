// Remote catalog provider - bridges the API client with CatalogSource
use async_trait::async_trait;

use arttools_api::{ArtToolRecord, CatalogClient, CatalogError, FeedbackRecord, LimitedTimeDeal};

use crate::{
    catalog::CatalogSource,
    models::{ArtTool, Feedback, LEGACY_DEAL_RATE},
    Error, Result,
};

/// Wrapper around [`CatalogClient`] that implements [`CatalogSource`].
pub struct RemoteCatalog {
    client: CatalogClient,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: CatalogClient::new(base_url),
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn list_art_tools(&self) -> Result<Vec<ArtTool>> {
        let records = self
            .client
            .list_art_tools()
            .await
            .map_err(map_catalog_err)?;

        Ok(records.into_iter().map(record_to_art_tool).collect())
    }

    async fn get_art_tool(&self, id: &str) -> Result<ArtTool> {
        let record = self.client.get_art_tool(id).await.map_err(map_catalog_err)?;
        Ok(record_to_art_tool(record))
    }
}

fn map_catalog_err(e: CatalogError) -> Error {
    match e {
        CatalogError::NotFound(id) => Error::NotFound(id),
        other => Error::CatalogError(other.to_string()),
    }
}

/// Convert a wire record to the canonical model. The deal-shape
/// migration for network data happens here.
fn record_to_art_tool(record: ArtToolRecord) -> ArtTool {
    ArtTool {
        id: record.id,
        art_name: record.art_name,
        description: record.description,
        price: record.price,
        glass_surface: record.glass_surface,
        image: record.image,
        brand: record.brand,
        limited_time_deal: record.limited_time_deal.and_then(canonical_deal_rate),
        feedbacks: record.feedbacks.into_iter().map(record_to_feedback).collect(),
    }
}

fn record_to_feedback(record: FeedbackRecord) -> Feedback {
    Feedback {
        rating: record.rating,
        comment: record.comment,
        author: record.author,
        date: record.date,
    }
}

fn canonical_deal_rate(deal: LimitedTimeDeal) -> Option<f64> {
    match deal {
        LimitedTimeDeal::Flag(false) => None,
        LimitedTimeDeal::Flag(true) => Some(LEGACY_DEAL_RATE),
        LimitedTimeDeal::Rate(rate) if rate > 0.0 => Some(rate.min(1.0)),
        LimitedTimeDeal::Rate(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(deal: Option<LimitedTimeDeal>) -> ArtToolRecord {
        ArtToolRecord {
            id: "1".to_string(),
            art_name: "Pencil".to_string(),
            description: "Graphite".to_string(),
            price: 2.5,
            glass_surface: true,
            image: "https://example.com/p.png".to_string(),
            brand: "Faber".to_string(),
            limited_time_deal: deal,
            feedbacks: vec![FeedbackRecord {
                rating: 4,
                comment: "Good".to_string(),
                author: "An".to_string(),
                date: "2024-01-15".to_string(),
            }],
        }
    }

    #[test]
    fn converts_all_fields() {
        let tool = record_to_art_tool(record(Some(LimitedTimeDeal::Rate(0.3))));

        assert_eq!(tool.id, "1");
        assert_eq!(tool.art_name, "Pencil");
        assert!(tool.glass_surface);
        assert_eq!(tool.limited_time_deal, Some(0.3));
        assert_eq!(tool.feedbacks.len(), 1);
        assert_eq!(tool.feedbacks[0].rating, 4);
    }

    #[test]
    fn deal_shapes_normalize_like_the_model() {
        assert_eq!(
            record_to_art_tool(record(Some(LimitedTimeDeal::Flag(true)))).limited_time_deal,
            Some(LEGACY_DEAL_RATE)
        );
        assert_eq!(
            record_to_art_tool(record(Some(LimitedTimeDeal::Flag(false)))).limited_time_deal,
            None
        );
        assert_eq!(
            record_to_art_tool(record(Some(LimitedTimeDeal::Rate(0.0)))).limited_time_deal,
            None
        );
        assert_eq!(record_to_art_tool(record(None)).limited_time_deal, None);
    }
}
