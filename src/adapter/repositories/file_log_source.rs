//! File Log Source Implementation
//!
//! ログソースのファイルシステム実装

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// ファイルベースのログソース
///
/// 有限で順序付きの行の列を一度だけ遅延的に供給する。1回の実行内で
/// 再開はできない（`lines` は先頭から読み直すが、インポータは一度しか
/// 消費しない）。
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    /// ログファイルを開く
    ///
    /// パスはチルダ展開される。存在しない、またはファイルでない場合は
    /// エラーを返す。
    pub fn open(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = PathBuf::from(expanded.as_ref());

        if !path.is_file() {
            bail!("Log file not found: {}", path.display());
        }

        Ok(Self { path })
    }

    /// ソースの識別子（宛先名の導出元になるパス）
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 行の遅延イテレータを返す
    pub fn lines(&self) -> Result<io::Lines<BufReader<File>>> {
        let file = File::open(&self.path)
            .context(format!("Failed to open log file: {}", self.path.display()))?;

        Ok(BufReader::new(file).lines())
    }
}
