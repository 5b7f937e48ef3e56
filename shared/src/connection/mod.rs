pub mod delivery_guarantee;
pub mod message_kind;
pub mod transport;
