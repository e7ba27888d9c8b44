//! Logsink - Server Log Importer
//!
//! サーバーログファイルをドキュメントストアに取り込む

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use logsink::adapter::config::Config;
use logsink::driver::{Args, LogImportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when no config file is present)
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = LogImportWorkflow::new(config);

    workflow.execute(args).await?;

    Ok(())
}
