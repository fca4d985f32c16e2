//! Core scheduling abstractions and quota accounting.

pub mod error;
pub mod quota;
pub mod scheduler;

pub use error::{ApiError, AppResult};
pub use quota::{QuotaWindow, RateWindows};
pub use scheduler::{QueuedRequest, RateLimitedScheduler, Spawn};
