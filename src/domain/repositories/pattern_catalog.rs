//! # Pattern Catalog Trait
//!
//! メッセージテンプレートカタログの検索を抽象化

use anyhow::Result;
use async_trait::async_trait;
use bson::Bson;

#[cfg(test)]
use mockall::automock;

/// カタログエントリ
///
/// 既知のログメッセージテンプレート1件。`uid` はカタログ側の一意識別子を
/// そのまま保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub uid: Bson,
    /// 正準的なパターン文字列
    pub pattern: String,
}

/// パターンカタログ
///
/// パターンキーによるテンプレート検索を担当するリポジトリ。
/// インポートループのホットパス上で行ごとに1回呼ばれる。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PatternCatalog: Send + Sync {
    /// パターンキーでカタログを検索する
    ///
    /// # Returns
    ///
    /// 未登録の場合は `Ok(None)`。未登録は想定内の状態でありエラーではない
    /// （新しいテンプレート形状はまずカタログに存在しない）。
    ///
    /// # Errors
    ///
    /// カタログへの問い合わせ自体に失敗した場合にエラーを返す
    async fn find_by_pattern(&self, pattern_key: &str) -> Result<Option<CatalogEntry>>;
}
