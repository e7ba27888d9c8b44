//! End-to-end pipeline tests
//!
//! インポートパイプライン全体の結合テスト（ストアは記録用モック）

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use bson::{Bson, Document};

use logsink::adapter::repositories::server_log_grammar::ServerLogGrammar;
use logsink::application::dto::import_config::ImportConfig;
use logsink::application::use_cases::import_log::ImportLogUseCase;
use logsink::application::use_cases::resolve_destination::DestinationResolver;
use logsink::domain::errors::ImportError;
use logsink::domain::repositories::document_store::{DocumentStore, WriteAcknowledgment};
use logsink::domain::repositories::line_grammar::LineGrammar;
use logsink::domain::repositories::pattern_catalog::{CatalogEntry, PatternCatalog};

/// 呼び出しを記録するインメモリストア
struct RecordingStore {
    existing: Vec<String>,
    inserts: Mutex<Vec<(String, Vec<Document>, WriteAcknowledgment)>>,
    drops: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn new() -> Self {
        Self::with_existing(vec![])
    }

    fn with_existing(existing: Vec<String>) -> Self {
        Self {
            existing,
            inserts: Mutex::new(Vec::new()),
            drops: Mutex::new(Vec::new()),
        }
    }

    fn insert_sizes(&self) -> Vec<usize> {
        self.inserts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, docs, _)| docs.len())
            .collect()
    }

    fn inserted_ids(&self) -> Vec<i64> {
        self.inserts
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, docs, _)| docs.iter())
            .map(|doc| doc.get_i64("_id").unwrap())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn collection_names(&self) -> Result<Vec<String>> {
        Ok(self.existing.clone())
    }

    async fn drop_collection(&self, name: &str) -> Result<()> {
        self.drops.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        acknowledgment: WriteAcknowledgment,
    ) -> Result<()> {
        self.inserts
            .lock()
            .unwrap()
            .push((collection.to_string(), documents, acknowledgment));
        Ok(())
    }
}

/// パターンキーから固定エントリを引くインメモリカタログ
struct MapCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl MapCatalog {
    fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn with_entry(pattern_key: &str, uid: i64, pattern: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            pattern_key.to_string(),
            CatalogEntry {
                uid: Bson::Int64(uid),
                pattern: pattern.to_string(),
            },
        );
        Self { entries }
    }
}

#[async_trait]
impl PatternCatalog for MapCatalog {
    async fn find_by_pattern(&self, pattern_key: &str) -> Result<Option<CatalogEntry>> {
        Ok(self.entries.get(pattern_key).cloned())
    }
}

fn source_lines(count: usize) -> impl Iterator<Item = io::Result<String>> {
    (0..count).map(|i| Ok(format!("[conn1] waiting for connections on port {}", i)))
}

#[tokio::test]
async fn test_import_25k_lines_batches_and_keys() {
    let store = Arc::new(RecordingStore::new());
    let grammar = Arc::new(ServerLogGrammar::new());
    let catalog = Arc::new(MapCatalog::empty());

    let resolver = DestinationResolver::new(store.clone());
    let destination = resolver
        .resolve("/var/log/mongod.log", None, false)
        .await
        .unwrap();
    assert_eq!(destination.name(), "mongod.log");

    // 既定設定: バッチサイズ10,000、確認応答なし
    let use_case = ImportLogUseCase::new(store.clone(), grammar, catalog, ImportConfig::default());
    let imported = use_case
        .execute(source_lines(25_000), &destination)
        .await
        .unwrap();

    assert_eq!(imported, 25_000);

    // 満杯バッチ2回 + 端数5,000のドレイン
    assert_eq!(store.insert_sizes(), vec![10_000, 10_000, 5_000]);

    // 全ドキュメントが宛先コレクションへ、確認応答なしで書かれている
    for (collection, _, acknowledgment) in store.inserts.lock().unwrap().iter() {
        assert_eq!(collection, "mongod.log");
        assert_eq!(*acknowledgment, WriteAcknowledgment::Unacknowledged);
    }

    // キーは 0..=24999 をちょうど一度ずつ
    let ids = store.inserted_ids();
    assert_eq!(ids.len(), 25_000);
    let unique: BTreeSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 25_000);
    assert_eq!(unique.first(), Some(&0));
    assert_eq!(unique.last(), Some(&24_999));
}

#[tokio::test]
async fn test_rerun_without_drop_fails_with_conflict() {
    // 前回の実行で作られたコレクションが残っている想定
    let store = Arc::new(RecordingStore::with_existing(vec![
        "mongod.log".to_string()
    ]));

    let resolver = DestinationResolver::new(store.clone());
    let err = resolver
        .resolve("/var/log/mongod.log", None, false)
        .await
        .unwrap_err();

    match err.downcast_ref::<ImportError>() {
        Some(ImportError::CollectionConflict { name }) => assert_eq!(name, "mongod.log"),
        other => panic!("expected CollectionConflict, got {:?}", other),
    }

    // 書き込みは一切発生しない
    assert!(store.inserts.lock().unwrap().is_empty());
    assert!(store.drops.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rerun_with_drop_replaces_collection() {
    let store = Arc::new(RecordingStore::with_existing(vec![
        "mongod.log".to_string()
    ]));
    let grammar = Arc::new(ServerLogGrammar::new());
    let catalog = Arc::new(MapCatalog::empty());

    let resolver = DestinationResolver::new(store.clone());
    let destination = resolver
        .resolve("/var/log/mongod.log", None, true)
        .await
        .unwrap();

    // 既存コレクションは破棄済み
    assert_eq!(*store.drops.lock().unwrap(), vec!["mongod.log".to_string()]);

    let use_case = ImportLogUseCase::new(
        store.clone(),
        grammar,
        catalog,
        ImportConfig::new(100, WriteAcknowledgment::Unacknowledged),
    );
    let imported = use_case
        .execute(source_lines(250), &destination)
        .await
        .unwrap();

    assert_eq!(imported, 250);
    assert_eq!(store.insert_sizes(), vec![100, 100, 50]);
}

#[tokio::test]
async fn test_catalog_hit_attaches_template_misses_do_not() {
    let grammar = ServerLogGrammar::new();

    // カタログには「waiting for connections on port」だけ登録されている
    let known_key = grammar
        .match_template("[conn1] waiting for connections on port 27017")
        .unwrap()
        .pattern_key;
    let catalog = Arc::new(MapCatalog::with_entry(
        &known_key,
        9001,
        "waiting for connections on port %d",
    ));

    let store = Arc::new(RecordingStore::new());
    let use_case = ImportLogUseCase::new(
        store.clone(),
        Arc::new(grammar),
        catalog,
        ImportConfig::default(),
    );

    let lines: Vec<io::Result<String>> = vec![
        // カタログに登録済みの形状
        Ok("[conn1] waiting for connections on port 27017".to_string()),
        // 形状はあるがカタログ未登録
        Ok("[conn2] end connection now".to_string()),
        // 形状そのものがない（全トークンが可変部）
        Ok("42 17 3.5".to_string()),
    ];

    let destination = DestinationResolver::new(store.clone())
        .resolve("mongod.log", None, false)
        .await
        .unwrap();
    use_case.execute(lines, &destination).await.unwrap();

    let inserts = store.inserts.lock().unwrap();
    let docs = &inserts[0].1;
    assert_eq!(docs.len(), 3);

    // 登録済み: テンプレート照合が付く
    let template = docs[0].get_document("template").unwrap();
    assert_eq!(template.get_i64("uid").unwrap(), 9001);
    assert_eq!(
        template.get_str("pattern").unwrap(),
        "waiting for connections on port %d"
    );
    let variables: Vec<&str> = template
        .get_array("variables")
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(variables, vec!["[conn1]", "27017"]);

    // 未登録と形状なしは出力上区別できない: どちらもフィールド欠落
    assert!(!docs[1].contains_key("template"));
    assert!(!docs[2].contains_key("template"));

    // どのドキュメントにもトークン分割は残らない
    for doc in docs.iter() {
        assert!(!doc.contains_key("tokens"));
        assert!(!doc.contains_key("split_tokens"));
    }
}
