//! # Import Errors
//!
//! インポート失敗の構造的な分類
//!
//! 致命的な失敗のみをエラーとして表現する。カタログ未登録（CatalogMiss）と
//! パース不能フィールド（ParseGap）は期待される状態であり、エラーではなく
//! 「フィールド欠落」として吸収される。

use thiserror::Error;

/// インポート実行を中断させる失敗
#[derive(Debug, Error)]
pub enum ImportError {
    /// 宛先コレクションが既に存在し、上書きが許可されていない
    ///
    /// 書き込みが一切発生する前に検出・送出される。
    #[error("collection \"{name}\" already exists (pass --drop to overwrite)")]
    CollectionConflict { name: String },

    /// 起動時にドキュメントストアへ到達できない
    ///
    /// 実行中の書き込み失敗はここには現れない（確認応答を無効化した
    /// 書き込みは失敗を報告しない）。
    #[error("document store unavailable: {0}")]
    StoreUnavailable(String),
}
