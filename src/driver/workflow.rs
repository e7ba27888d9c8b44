//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::mongo::create_store_client;
use crate::adapter::repositories::file_log_source::FileLogSource;
use crate::adapter::repositories::mongo_document_store::MongoDocumentStore;
use crate::adapter::repositories::mongo_pattern_catalog::MongoPatternCatalog;
use crate::adapter::repositories::server_log_grammar::ServerLogGrammar;
use crate::application::dto::import_config::ImportConfig;
use crate::application::use_cases::import_log::ImportLogUseCase;
use crate::application::use_cases::resolve_destination::DestinationResolver;

use super::cli::Args;

/// Log Import Workflow
pub struct LogImportWorkflow {
    config: Config,
}

impl LogImportWorkflow {
    /// Create a new workflow instance with injected configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the import workflow
    pub async fn execute(&self, args: Args) -> Result<i64> {
        info!("Starting log import...");

        println!("✓ Using configuration:");
        println!("  Store: {}", self.config.uri);
        println!("  Database: {}", self.config.database);
        println!(
            "  Catalog: {}.{}",
            self.config.catalog_database, self.config.catalog_collection
        );

        // Store handle is scoped to this run: created here, dropped on return
        let client = create_store_client(&self.config.uri).await?;
        let store = Arc::new(MongoDocumentStore::new(
            client.database(&self.config.database),
        ));
        let catalog = Arc::new(MongoPatternCatalog::new(
            client
                .database(&self.config.catalog_database)
                .collection(&self.config.catalog_collection),
        ));
        let grammar = Arc::new(ServerLogGrammar::new());

        let source = FileLogSource::open(&args.logfile)?;

        // Resolve the destination once, before any write
        let resolver = DestinationResolver::new(store.clone());
        let destination = resolver
            .resolve(
                &source.path().to_string_lossy(),
                args.collection.as_deref(),
                args.drop,
            )
            .await?;
        println!("✓ Resolved destination collection: {}", destination.name());

        let import_config = ImportConfig::new(
            self.config.batch_size,
            self.config.write_acknowledgment(),
        );
        let use_case = ImportLogUseCase::new(store, grammar, catalog, import_config);

        let imported = use_case.execute(source.lines()?, &destination).await?;

        println!(
            "✓ Imported {} lines into \"{}\"",
            imported,
            destination.name()
        );

        Ok(imported)
    }
}
