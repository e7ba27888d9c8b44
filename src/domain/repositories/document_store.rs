//! # Document Store Trait
//!
//! 宛先ドキュメントストアの操作を抽象化

use anyhow::Result;
use async_trait::async_trait;
use bson::Document;

#[cfg(test)]
use mockall::automock;

/// 書き込み確認応答モード
///
/// 明示的な耐久性/スループットのトレードオフ設定。
/// `Unacknowledged` では挿入コマンド発行後の成否を待たず、検証もしない。
/// 実行中の書き込み失敗は呼び出し側に現れない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteAcknowledgment {
    /// ストアの確認応答を待つ
    Acknowledged,
    /// 確認応答を待たない（fire-and-forget）
    #[default]
    Unacknowledged,
}

/// ドキュメントストア
///
/// 宛先ストアとの統合を担当するリポジトリ。ハンドルのライフサイクルは
/// 1回のインポート実行に限定される（プロセス全体で共有しない）。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 既存のコレクション名を列挙する
    ///
    /// # Errors
    ///
    /// ストアへ到達できない場合にエラーを返す（起動時の接続性チェックを兼ねる）
    async fn collection_names(&self) -> Result<Vec<String>>;

    /// コレクションを名前で削除する
    async fn drop_collection(&self, name: &str) -> Result<()>;

    /// ドキュメントをバルク挿入する
    ///
    /// # Arguments
    ///
    /// * `collection` - 挿入先コレクション名
    /// * `documents` - 挿入するドキュメント（空の場合はno-op）
    /// * `acknowledgment` - 書き込み確認応答モード
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        acknowledgment: WriteAcknowledgment,
    ) -> Result<()>;
}
