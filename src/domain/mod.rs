pub mod article;
pub mod auth;
pub mod comment;
pub mod news;
pub mod notification;
pub mod push;
pub mod shared;
pub mod syndication;
pub mod user;
pub mod youtube;
