pub mod error;
pub mod model;
pub mod service;

pub use error::ArticleServiceError;
pub use model::{
    Article, ArticleQuery, CreateArticleRequest, NewArticle, UpdateArticleRequest,
    STATUS_PUBLISHED,
};
pub use service::{ArticleService, ArticleServiceApi};
