//! Ports & Adapters のポート定義
//!
//! - inbound: CLI（main）がアプリを呼び出す入口
//! - outbound: run-codex 固有の外界（STDIN）。共通のものは common::ports::outbound

pub mod inbound;
pub mod outbound;
