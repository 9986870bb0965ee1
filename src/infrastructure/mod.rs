pub mod database;
pub mod observer;
pub mod repositories;
pub mod time;
pub mod util;
