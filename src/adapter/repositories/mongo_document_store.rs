//! MongoDB Document Store Implementation
//!
//! DocumentStoreのMongoDB実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use bson::Document;
use mongodb::options::{Acknowledgment, WriteConcern};
use mongodb::Database;

use crate::domain::repositories::document_store::{DocumentStore, WriteAcknowledgment};

/// MongoDBベースのドキュメントストア
///
/// ハンドルは1回のインポート実行のために生成され、実行終了とともに
/// 解放される（プロセス全体で共有される接続状態を持たない）。
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// 新しいストアを作成
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Unacknowledgedをw:0の書き込み懸念に対応付ける
    fn write_concern(acknowledgment: WriteAcknowledgment) -> Option<WriteConcern> {
        match acknowledgment {
            // サーバー既定の確認応答に任せる
            WriteAcknowledgment::Acknowledged => None,
            WriteAcknowledgment::Unacknowledged => Some(
                WriteConcern::builder()
                    .w(Acknowledgment::Nodes(0))
                    .build(),
            ),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn collection_names(&self) -> Result<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .context("Failed to list collection names")
    }

    async fn drop_collection(&self, name: &str) -> Result<()> {
        self.database
            .collection::<Document>(name)
            .drop()
            .await
            .context(format!("Failed to drop collection \"{}\"", name))
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        acknowledgment: WriteAcknowledgment,
    ) -> Result<()> {
        // ドライバは空の挿入を拒否する。空のバルク挿入はno-op
        if documents.is_empty() {
            return Ok(());
        }

        let target = self.database.collection::<Document>(collection);
        let mut insert = target.insert_many(documents);
        if let Some(write_concern) = Self::write_concern(acknowledgment) {
            insert = insert.write_concern(write_concern);
        }

        insert
            .await
            .context(format!("Bulk insert into \"{}\" failed", collection))?;

        Ok(())
    }
}
