//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// サーバーログをドキュメントストアに取り込むCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "logsink")]
#[command(about = "Import a server log file into a document store collection", long_about = None)]
pub struct Args {
    /// Path to the log file to import
    pub logfile: String,

    /// Destination collection name (defaults to the log file's base name)
    #[arg(long)]
    pub collection: Option<String>,

    /// Drop a pre-existing collection with the same name before importing
    #[arg(long)]
    pub drop: bool,

    /// Config file path
    #[arg(short, long, default_value = "./logsink.json")]
    pub config: String,
}
