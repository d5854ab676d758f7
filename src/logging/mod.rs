// Logging module
// Persistent record of delivery attempts (diagnostics go through `tracing`)

mod delivery_log;

pub use delivery_log::{DeliveryKind, DeliveryLog, DeliveryRecord, DeliveryStatus, DeliverySummary};
