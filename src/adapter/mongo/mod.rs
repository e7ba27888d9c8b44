//! MongoDB Adapter Modules
//!
//! MongoDB統合のためのアダプターモジュール

pub mod client;

pub use client::create_store_client;
