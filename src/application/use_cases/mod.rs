//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **RecordBuilder**: 1行から正準的なレコードを構築
//! - **TemplateCorrelator**: テンプレート照合とカタログ検索
//! - **DestinationResolver**: 宛先コレクションの解決
//! - **ImportLogUseCase**: インポート全体のオーケストレーション

pub mod build_record;
pub mod correlate_template;
pub mod import_log;
pub mod resolve_destination;
