//! MongoDB Pattern Catalog Implementation
//!
//! PatternCatalogのMongoDB実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use bson::{doc, Document};
use log::warn;
use mongodb::Collection;

use crate::domain::repositories::pattern_catalog::{CatalogEntry, PatternCatalog};

/// MongoDBベースのパターンカタログ
///
/// カタログはパターン文字列をキーに1件引きする外部サービスであり、
/// このアダプタはその問い合わせだけを担当する（カタログの構築・更新は
/// 別系統）。
pub struct MongoPatternCatalog {
    collection: Collection<Document>,
}

impl MongoPatternCatalog {
    /// 新しいカタログを作成
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl PatternCatalog for MongoPatternCatalog {
    async fn find_by_pattern(&self, pattern_key: &str) -> Result<Option<CatalogEntry>> {
        let found = self
            .collection
            .find_one(doc! { "pattern": pattern_key })
            .await
            .context("Pattern catalog query failed")?;

        Ok(found.and_then(|entry| {
            let Some(uid) = entry.get("_id").cloned() else {
                // 識別子のないエントリは未登録と同じ扱い
                warn!("Catalog entry without _id for pattern: {}", pattern_key);
                return None;
            };
            let pattern = entry
                .get_str("pattern")
                .map(str::to_owned)
                .unwrap_or_else(|_| pattern_key.to_owned());

            Some(CatalogEntry { uid, pattern })
        }))
    }
}
