//! # Resolve Destination Use Case
//!
//! 宛先コレクション解決のユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::destination::DestinationCollection;
use crate::domain::errors::ImportError;
use crate::domain::repositories::document_store::DocumentStore;

/// 宛先リゾルバ
///
/// 書き込み開始前に一度だけ実行され、コレクション名の導出と命名衝突の
/// 解決を行う。check-then-actは同名を狙う並行インポータに対して
/// アトミックではない（単一ライタ前提）。
pub struct DestinationResolver<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> DestinationResolver<S> {
    /// 新しいリゾルバを作成
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 宛先コレクションを解決する
    ///
    /// # Arguments
    ///
    /// * `source` - ソースの識別子（明示名がない場合の導出元）
    /// * `explicit_name` - 明示的に指定されたコレクション名
    /// * `drop_if_exists` - 同名コレクションが既存の場合に破棄を許可するか
    ///
    /// # Errors
    ///
    /// - 同名コレクションが存在し破棄が許可されていない場合は
    ///   `ImportError::CollectionConflict`（書き込みは一切発生しない）
    /// - ストアへ到達できない場合は `ImportError::StoreUnavailable`
    pub async fn resolve(
        &self,
        source: &str,
        explicit_name: Option<&str>,
        drop_if_exists: bool,
    ) -> Result<DestinationCollection> {
        let name = match explicit_name {
            Some(name) => name.to_string(),
            None => DestinationCollection::derive_name(source),
        };

        // 起動時の接続性チェックを兼ねる
        let existing = self
            .store
            .collection_names()
            .await
            .map_err(|e| ImportError::StoreUnavailable(format!("{e:#}")))?;

        if existing.iter().any(|existing_name| existing_name == &name) {
            if !drop_if_exists {
                return Err(ImportError::CollectionConflict { name }.into());
            }
            // 破棄済みコレクションは中断しても復元されない
            self.store.drop_collection(&name).await?;
        }

        Ok(DestinationCollection::new(name))
    }
}
