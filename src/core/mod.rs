pub mod demo;
pub mod engine;
pub mod stripper;

pub use crate::domain::language::{CommentRules, Language};
pub use crate::domain::model::{Container, StripOutcome, StripReport, StripStats};
pub use crate::domain::ports::{Storage, StripSettings};
pub use crate::utils::error::Result;
