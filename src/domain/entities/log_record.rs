//! # LogRecord Entity
//!
//! ログ1行の正準的なドキュメント表現

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// テンプレート照合結果
///
/// 行が既知のメッセージテンプレートに一致した場合のみ `LogRecord` に付与される。
/// `uid` はカタログ側の一意識別子をそのまま保持する（文字列化しない）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateMatch {
    pub uid: Bson,
    pub pattern: String,
    /// テンプレートの可変部に対応する値（行中の出現順）
    pub variables: Vec<String>,
}

/// ログレコードのドメインエンティティ
///
/// 入力1行とそのファイル内序数から導出される、永続化対象のドキュメント。
/// 序数がそのまま永続キー（`_id`）になる。行文法が識別できなかった
/// フィールドは単に欠落する（パース失敗は実行を止めない）。
///
/// トークン分割はパースの中間成果物であり、このエンティティには含まれない。
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ファイル内の0始まり序数。実行内で一意かつ単調増加
    #[serde(rename = "_id")]
    pub id: i64,
    /// 生の行テキスト
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// 処理時間（ミリ秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// カウンタ名（nscanned, nreturned等）から整数値へのマッピング
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub counters: BTreeMap<String, i64>,
    /// テンプレート照合結果。不一致とカタログ未登録は区別されず、どちらも欠落
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateMatch>,
}

impl LogRecord {
    /// 永続化用のBSONドキュメントに変換
    ///
    /// `None` のフィールドはドキュメントに現れない（nullではなく欠落）。
    pub fn to_document(&self) -> Result<Document> {
        bson::to_document(self).context("Failed to serialize log record")
    }
}
