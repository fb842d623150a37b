pub mod metrics;

pub use metrics::{rejection_reason, ClassifierMetrics};
