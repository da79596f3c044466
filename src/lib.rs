pub mod cascade;
pub mod config;
pub mod database;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod repository;
pub mod router;
pub mod validate;
