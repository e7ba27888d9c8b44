//! MongoDB Client Construction
//!
//! ストアクライアントの生成

use anyhow::{Context, Result};
use mongodb::Client;

/// Creates a document store client from a connection URI
///
/// The driver connects lazily: URI parsing fails here, but an unreachable
/// server only surfaces at the first operation (the startup collection
/// listing in the destination resolver).
pub async fn create_store_client(uri: &str) -> Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("Failed to create document store client")?;

    Ok(client)
}
