//! fincat-rest - REST-backed product catalog for fincat.

mod client;
mod entity;
mod repository;

pub use repository::RestRepository;
