//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **LogRecord**: ログ1行の正準的なドキュメント表現
//! - **ImportBatch**: バルク書き込み単位のバリューオブジェクト
//! - **DestinationCollection**: 取り込み先コレクション

pub mod destination;
pub mod import_batch;
pub mod log_record;
