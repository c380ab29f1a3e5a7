pub use super::parcels::Entity as Parcels;
pub use super::payments::Entity as Payments;
pub use super::riders::Entity as Riders;
pub use super::tracking_events::Entity as TrackingEvents;
pub use super::users::Entity as Users;
