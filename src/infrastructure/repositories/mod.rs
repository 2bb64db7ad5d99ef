pub mod article_repository;
pub mod comment_repository;
pub mod json_store;
pub mod subscription_repository;
pub mod user_repository;

pub use article_repository::{ArticleRepository, PgArticleRepository};
pub use comment_repository::CommentRepository;
pub use json_store::JsonFileStore;
pub use subscription_repository::{JsonSubscriptionRepository, SubscriptionRepository};
pub use user_repository::{PgUserRepository, UserRepository};
