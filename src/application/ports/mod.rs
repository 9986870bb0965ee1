// src/application/ports/mod.rs
pub mod observer;
pub mod time;
pub mod util;

pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type ConversionObserverPort = dyn observer::ConversionObserver;
