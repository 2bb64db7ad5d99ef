pub mod error;
pub mod gateway;
pub mod model;
pub mod service;

pub use error::PushServiceError;
pub use gateway::{PushDeliveryError, PushGateway};
pub use model::{
    default_topics, BroadcastReport, BroadcastRequest, PushPayload, PushStats, PushSubscription,
    SubscribeRequest, SubscriptionKeys, UnsubscribeRequest, UpdateTopicsRequest, DEFAULT_TOPIC,
};
pub use service::PushService;
