//! # Import Log Use Case
//!
//! インポート全体のオーケストレーション
//!
//! INIT -> STREAMING -> DRAINING -> DONE の順で1つのログソースを
//! 端から端まで処理する。内部並列性はなく、実行途中のキャンセル機構も
//! 持たない（完走するか、未処理のエラーで失敗するかのどちらか）。

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::application::dto::import_config::ImportConfig;
use crate::application::use_cases::build_record::RecordBuilder;
use crate::application::use_cases::correlate_template::TemplateCorrelator;
use crate::domain::entities::destination::DestinationCollection;
use crate::domain::entities::import_batch::ImportBatch;
use crate::domain::repositories::document_store::DocumentStore;
use crate::domain::repositories::line_grammar::LineGrammar;
use crate::domain::repositories::pattern_catalog::PatternCatalog;

/// ログインポートユースケース
///
/// 行ごとにレコード構築とテンプレート照合を行い、固定サイズのバッチに
/// 蓄積して宛先へバルク書き込みする。バッチは実行中このユースケースが
/// 排他的に所有する。
pub struct ImportLogUseCase<S, G, C>
where
    S: DocumentStore,
    G: LineGrammar,
    C: PatternCatalog,
{
    store: Arc<S>,
    builder: RecordBuilder<G>,
    correlator: TemplateCorrelator<G, C>,
    config: ImportConfig,
}

impl<S, G, C> ImportLogUseCase<S, G, C>
where
    S: DocumentStore,
    G: LineGrammar,
    C: PatternCatalog,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `store` - 宛先ドキュメントストア
    /// * `grammar` - 行文法（レコード構築と形状照合で共有）
    /// * `catalog` - パターンカタログ
    /// * `config` - インポート設定
    pub fn new(store: Arc<S>, grammar: Arc<G>, catalog: Arc<C>, config: ImportConfig) -> Self {
        Self {
            store,
            builder: RecordBuilder::new(grammar.clone()),
            correlator: TemplateCorrelator::new(grammar, catalog),
            config,
        }
    }

    /// ログソースを取り込み、処理した行数を返す
    ///
    /// ソースは一度だけ消費される（再開不可）。序数は0始まりで
    /// 出現順に採番され、そのまま永続キーになる。
    ///
    /// バッチへの追加件数を明示的に数え、満杯になったらフラッシュする。
    /// 序数の剰余判定ではないため、最初のフラッシュも満杯のバッチで起きる。
    ///
    /// # Errors
    ///
    /// ソースの読み取りエラー、レコードのシリアライズ失敗、カタログ
    /// 問い合わせの失敗で中断する。確認応答を無効化した書き込み自体の
    /// 失敗はここには現れない。
    pub async fn execute<I>(
        &self,
        lines: I,
        destination: &DestinationCollection,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        // INIT
        let batch_size = self.config.batch_size.max(1);
        let mut batch = ImportBatch::with_capacity(batch_size);
        let mut processed: i64 = 0;

        // STREAMING
        for line in lines {
            let line = line.context("Failed to read line from log source")?;

            let mut record = self.builder.build(&line, processed);
            record.template = self.correlator.correlate(&line).await?;

            batch.push(record.to_document()?);
            processed += 1;

            if batch.len() >= batch_size {
                self.flush(&mut batch, destination, processed).await?;
            }
        }

        // DRAINING: 端数を書き切る（空のバルク挿入はno-opなので発行しない）
        if !batch.is_empty() {
            self.flush(&mut batch, destination, processed).await?;
        }

        // DONE
        info!(
            "Import complete: {} lines into \"{}\"",
            processed,
            destination.name()
        );

        Ok(processed)
    }

    /// 現在のバッチを宛先へ書き込み、進捗を通知する
    async fn flush(
        &self,
        batch: &mut ImportBatch,
        destination: &DestinationCollection,
        processed: i64,
    ) -> Result<()> {
        self.store
            .insert_many(
                destination.name(),
                batch.take(),
                self.config.write_acknowledgment,
            )
            .await?;

        // バッチ境界ごとの一方向の進捗シグナル
        info!("Imported {} lines so far...", processed);

        Ok(())
    }
}
