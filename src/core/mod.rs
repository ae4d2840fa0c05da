pub mod bank;
pub mod registry;

pub use crate::domain::account::{Account, AccountKind, TrustTerms};
pub use crate::domain::ports::Console;
pub use crate::domain::school::{Course, Instructor, Student};
pub use crate::utils::error::Result;
