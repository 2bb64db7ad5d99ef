pub mod auth;
pub mod config;
pub mod db;
pub mod feeds;
pub mod firebase;
pub mod http;
pub mod repositories;
pub mod webpush;
pub mod youtube;
