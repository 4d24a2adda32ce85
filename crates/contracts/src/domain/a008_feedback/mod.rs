pub mod aggregate;
pub mod samples;

pub use aggregate::{Feedback, FeedbackKind, FeedbackStatus};
pub use samples::sample_feedback;
