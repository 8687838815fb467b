pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod services;
