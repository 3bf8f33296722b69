pub mod capability;
pub mod demo;
pub mod inspect;
pub mod meta;
pub mod reflective;
pub mod registry;

pub use crate::domain::model::{Car, Cow, Duck, Lineup};
pub use crate::domain::ports::{Console, Soundable};
pub use crate::utils::error::Result;
