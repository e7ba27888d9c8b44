//! # ImportBatch Value Object
//!
//! バルク書き込み単位のバリューオブジェクト

use bson::Document;

/// インポートバッチ
///
/// フラッシュ間に蓄積される、確定済みドキュメントの有界なバッファ。
/// 1回の実行中にのみ存在し、単独では永続化されない。
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    documents: Vec<Document>,
}

impl ImportBatch {
    /// 新しい空のバッチを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// バッチサイズ分の容量を確保して作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Vec::with_capacity(capacity),
        }
    }

    /// ドキュメントを末尾に追加
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// バッチ内のドキュメント数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// ドキュメントへの参照を返す
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// 中身を取り出してバッチを空に戻す
    ///
    /// フラッシュ時に使用する。容量は維持されない。
    pub fn take(&mut self) -> Vec<Document> {
        std::mem::take(&mut self.documents)
    }
}

impl From<Vec<Document>> for ImportBatch {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl From<ImportBatch> for Vec<Document> {
    fn from(batch: ImportBatch) -> Self {
        batch.documents
    }
}
