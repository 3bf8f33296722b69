pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{MemoryConsole, WriterConsole};
pub use config::DemoConfig;
pub use crate::core::{
    demo::{CapabilityDemo, ReflectiveDemo},
    meta::{Reflect, TypeInfo},
    reflective::ReflectiveDispatcher,
    registry::TypeRegistry,
};
pub use domain::model::{Car, Cow, Duck, Lineup};
pub use domain::ports::{Console, Soundable};
pub use utils::error::{DispatchError, Result};
