pub mod command;
pub mod domain;
pub mod error;
pub mod report;
pub mod session;
pub mod tracker;

pub use command::Command;
pub use domain::{Direction, Position, Variant};
pub use error::{ParseVariantError, RejectedCommand, SessionError};
pub use report::SessionSummary;
pub use session::{Session, SessionState, Step};
pub use tracker::Tracker;
