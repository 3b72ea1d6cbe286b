//! Collaborating subsystems the order manager coordinates

pub mod id_allocator;
pub mod kitchen;
pub mod notifications;

pub use id_allocator::OrderIdAllocator;
pub use kitchen::KitchenService;
pub use notifications::{Notification, NotificationKind, NotificationService};
