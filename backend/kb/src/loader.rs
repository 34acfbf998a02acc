use async_trait::async_trait;
use tracing::info;

use nutriscan_core::ScanError;

use crate::dataset::static_records;
use crate::snapshot::KnowledgeBase;

/// Abstract interface for producing a knowledge-base snapshot.
///
/// The pipeline itself never sees a loader — it is handed a finished
/// `KnowledgeBase` and only reads it.
#[async_trait]
pub trait KbLoader: Send + Sync {
    async fn load(&self) -> Result<KnowledgeBase, ScanError>;
}

/// Loader backed by the compiled-in fallback dataset.
///
/// Used for local development and as the fallback when no database
/// connection is configured.
#[derive(Debug, Default)]
pub struct StaticKbLoader;

impl StaticKbLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KbLoader for StaticKbLoader {
    async fn load(&self) -> Result<KnowledgeBase, ScanError> {
        let kb = KnowledgeBase::from_records(static_records());
        info!("loaded static ingredient dataset ({} records)", kb.len());
        Ok(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::Category;

    #[tokio::test]
    async fn static_loader_produces_usable_snapshot() {
        let kb = StaticKbLoader::new().load().await.unwrap();
        assert!(!kb.is_empty());
        assert_eq!(kb.get("sugar").unwrap().category, Category::Caution);
        assert_eq!(
            kb.get("high fructose corn syrup").unwrap().category,
            Category::Danger
        );
    }
}
