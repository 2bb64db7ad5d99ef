pub mod article;
pub mod auth;
pub mod comment;
pub mod extract;
pub mod health;
pub mod news;
pub mod notification;
pub mod push;
pub mod rss;
pub mod youtube;
