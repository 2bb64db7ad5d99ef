pub mod error;
pub mod model;
pub mod sender;
pub mod service;

pub use error::{NotificationError, NotificationServiceError};
pub use model::{SendNotificationResponse, TopicMessage};
pub use sender::{NotificationSender, NullSender};
pub use service::NotificationService;
