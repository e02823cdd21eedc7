pub mod config;
pub mod credentials;
pub mod db;
pub mod entity;
pub mod error;
pub mod exit;
pub mod logging;
pub mod models;
pub mod seed;
pub mod store;
