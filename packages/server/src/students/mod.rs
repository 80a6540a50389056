pub mod service;
pub mod store;

pub use service::{ScoredStudent, SubmitError, submit_student};
pub use store::StudentStore;
