use std::sync::Arc;

use sqlx::PgPool;

use gauchorecords_domain::{
    Article, HelpRequest, RecommendationRequest, UcsbDate, UcsbDiningCommonsMenuItem,
};
use gauchorecords_store::{MemoryRecordStore, PgRecordStore, RecordStore};

/// The per-entity persistence gateways the handlers talk to.
pub struct AppStores {
    pub articles: Arc<dyn RecordStore<Article>>,
    pub help_requests: Arc<dyn RecordStore<HelpRequest>>,
    pub recommendation_requests: Arc<dyn RecordStore<RecommendationRequest>>,
    pub menu_items: Arc<dyn RecordStore<UcsbDiningCommonsMenuItem>>,
    pub ucsb_dates: Arc<dyn RecordStore<UcsbDate>>,
}

impl AppStores {
    /// In-memory stores for tests and local development.
    pub fn in_memory() -> Self {
        Self {
            articles: Arc::new(MemoryRecordStore::new()),
            help_requests: Arc::new(MemoryRecordStore::new()),
            recommendation_requests: Arc::new(MemoryRecordStore::new()),
            menu_items: Arc::new(MemoryRecordStore::new()),
            ucsb_dates: Arc::new(MemoryRecordStore::new()),
        }
    }

    /// Postgres-backed stores sharing one connection pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            articles: Arc::new(PgRecordStore::new(pool.clone())),
            help_requests: Arc::new(PgRecordStore::new(pool.clone())),
            recommendation_requests: Arc::new(PgRecordStore::new(pool.clone())),
            menu_items: Arc::new(PgRecordStore::new(pool.clone())),
            ucsb_dates: Arc::new(PgRecordStore::new(pool)),
        }
    }
}
