//! # Line Grammar Trait
//!
//! 行レベルのログ文法を抽象化
//!
//! 行文法はこのクレートの外部協調者であり、2つの独立した能力として
//! モデル化する: ベストエフォートのフィールド抽出（`parse`）と、
//! 可変部抽出付きのテンプレート形状照合（`match_template`）。
//! それぞれ単体でテスト・差し替えできる。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// 1行をベストエフォートでパースした中間表現
///
/// 識別できなかったフィールドは単に欠落する。`tokens` はパースの
/// 中間成果物であり、永続化対象には決して含めない。
#[derive(Debug, Clone, Default)]
pub struct ParsedLine {
    pub timestamp: Option<DateTime<Utc>>,
    /// 処理時間（ミリ秒）
    pub duration: Option<i64>,
    pub thread: Option<String>,
    pub operation: Option<String>,
    pub namespace: Option<String>,
    pub counters: BTreeMap<String, i64>,
    /// トークン分割（中間成果物、永続化しない）
    pub tokens: Vec<String>,
}

/// テンプレート形状の照合結果
///
/// `pattern_key` はカタログ検索に使う固定部のキー。`variables` は
/// テンプレートが可変とマークする位置から抽出した値（行中の出現順）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateShape {
    pub pattern_key: String,
    pub variables: Vec<String>,
}

/// 行文法
///
/// ログ行の構文解析を担当する外部協調者のインターフェース
#[cfg_attr(test, automock)]
pub trait LineGrammar: Send + Sync {
    /// 行をベストエフォートでパースする
    ///
    /// 失敗経路を持たない。不正な行でも空に近い `ParsedLine` を返す。
    fn parse(&self, line: &str) -> ParsedLine;

    /// 行が既知のテンプレート形状に一致するかを判定し、可変部を抽出する
    ///
    /// # Returns
    ///
    /// 形状が見つからない場合は `None`
    fn match_template(&self, line: &str) -> Option<TemplateShape>;
}
