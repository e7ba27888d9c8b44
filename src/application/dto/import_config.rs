//! # Import Configuration DTO
//!
//! インポート設定のData Transfer Object

use crate::domain::repositories::document_store::WriteAcknowledgment;

/// 既定のバッチサイズ
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// インポート設定
///
/// 1回のインポート実行に必要な設定情報
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// バルク挿入1回あたりのドキュメント数
    pub batch_size: usize,
    /// 書き込み確認応答モード
    pub write_acknowledgment: WriteAcknowledgment,
}

impl ImportConfig {
    /// 新しいインポート設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use logsink::application::dto::import_config::ImportConfig;
    /// use logsink::domain::repositories::document_store::WriteAcknowledgment;
    ///
    /// // スループット優先（既定）
    /// let fast = ImportConfig::new(10_000, WriteAcknowledgment::Unacknowledged);
    /// assert_eq!(fast.batch_size, 10_000);
    ///
    /// // 耐久性優先
    /// let durable = ImportConfig::new(1_000, WriteAcknowledgment::Acknowledged);
    /// assert_eq!(durable.write_acknowledgment, WriteAcknowledgment::Acknowledged);
    /// ```
    pub fn new(batch_size: usize, write_acknowledgment: WriteAcknowledgment) -> Self {
        Self {
            batch_size,
            write_acknowledgment,
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            write_acknowledgment: WriteAcknowledgment::default(),
        }
    }
}
