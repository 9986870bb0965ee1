// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall clock used for slug disambiguation tokens.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
