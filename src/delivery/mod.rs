// Delivery jobs
//
// A send cycle never panics or retries. Missing vocabulary is an error for the
// caller to log; transport failures come back inside the report.

mod job;

pub use job::{CapsuleJob, DeliveryReport};
