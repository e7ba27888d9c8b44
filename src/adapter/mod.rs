//! Adapter Layer
//!
//! 外部システム（MongoDB, ファイルシステム）との統合

pub mod config;
pub mod mongo;
pub mod repositories;
