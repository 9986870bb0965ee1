// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod observer;
pub mod store;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ドキュメントストア
pub use store::InMemoryStore;

// 進捗・完了通知
pub use observer::RecordingObserver;

// ユーティリティ関連
pub use util::{DummyClock, DummySlug};
