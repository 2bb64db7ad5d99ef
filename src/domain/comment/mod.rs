pub mod model;
pub mod service;

pub use model::{Comment, CommentQuery, CreateCommentRequest};
pub use service::{CommentService, CommentServiceError};
