//! # Build Record Use Case
//!
//! 1行から正準的なレコードを構築するユースケース

use std::sync::Arc;

use crate::domain::entities::log_record::LogRecord;
use crate::domain::repositories::line_grammar::LineGrammar;

/// レコードビルダー
///
/// 生のログ行とファイル内序数から永続化対象の `LogRecord` を構築する。
/// 行文法が導出したいかなる識別子よりも序数を優先してキーにする。
pub struct RecordBuilder<G: LineGrammar> {
    grammar: Arc<G>,
}

impl<G: LineGrammar> RecordBuilder<G> {
    /// 新しいレコードビルダーを作成
    pub fn new(grammar: Arc<G>) -> Self {
        Self { grammar }
    }

    /// 1行をレコードに変換する
    ///
    /// 失敗経路を持たない。行文法が識別できなかったフィールドは欠落する
    /// だけで、不正な行が実行を止めることはない。トークン分割はここで
    /// 破棄され、出力には決して現れない。
    ///
    /// # Arguments
    ///
    /// * `line` - 生のログ行
    /// * `ordinal` - ファイル内の0始まり序数（永続キーになる）
    pub fn build(&self, line: &str, ordinal: i64) -> LogRecord {
        let parsed = self.grammar.parse(line);

        LogRecord {
            id: ordinal,
            line: line.to_string(),
            timestamp: parsed.timestamp,
            duration: parsed.duration,
            thread: parsed.thread,
            operation: parsed.operation,
            namespace: parsed.namespace,
            counters: parsed.counters,
            // 照合は別ユースケース（TemplateCorrelator）が担当する
            template: None,
        }
    }
}
