//! Configuration
//!
//! JSONファイルによる設定の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::import_config::DEFAULT_BATCH_SIZE;
use crate::domain::repositories::document_store::WriteAcknowledgment;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// ドキュメントストアの接続URI
    pub uri: String,
    /// 取り込み先データベース名
    pub database: String,
    /// パターンカタログのデータベース名
    pub catalog_database: String,
    /// パターンカタログのコレクション名
    pub catalog_collection: String,
    /// バルク挿入1回あたりのドキュメント数
    pub batch_size: usize,
    /// 書き込みの確認応答を待つかどうか
    ///
    /// 既定はfalse（スループット優先、挿入失敗は検出されない）
    pub acknowledge_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "logfiles".to_string(),
            catalog_database: "log2code".to_string(),
            catalog_collection: "instances".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            acknowledge_writes: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// 設定ファイルがあれば読み込み、なければ既定値を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn write_acknowledgment(&self) -> WriteAcknowledgment {
        if self.acknowledge_writes {
            WriteAcknowledgment::Acknowledged
        } else {
            WriteAcknowledgment::Unacknowledged
        }
    }
}
