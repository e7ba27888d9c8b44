//! # DestinationCollection Entity
//!
//! 取り込み先コレクション

use std::path::Path;

/// 取り込み先コレクション
///
/// 書き込み開始前に一度だけ解決される。名前は明示指定されるか、
/// ソースファイル名から導出される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCollection {
    name: String,
}

impl DestinationCollection {
    /// 解決済みの名前からコレクションを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// コレクション名を返す
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ソースの識別子からコレクション名を導出する
    ///
    /// ディレクトリ部分のみを取り除く純粋な名前変換。内容は一切参照しない。
    /// 拡張子は保持する（`/var/log/mongod.log` と `mongod.log` は同じ名前になる）。
    pub fn derive_name(source: &str) -> String {
        Path::new(source)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| source.to_string())
    }
}
