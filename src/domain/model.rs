use crate::domain::ports::{Console, Soundable};
use crate::utils::error::Result;

pub const DEFAULT_DUCK_CALL: &str = "Quack!";
pub const DEFAULT_COW_CALL: &str = "Mooo!";
pub const DEFAULT_CAR_HORN: &str = "Honk honk!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duck {
    pub call: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cow {
    pub call: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub horn: String,
}

impl Duck {
    pub fn new(call: impl Into<String>) -> Self {
        Self { call: call.into() }
    }
}

impl Cow {
    pub fn new(call: impl Into<String>) -> Self {
        Self { call: call.into() }
    }
}

impl Car {
    pub fn new(horn: impl Into<String>) -> Self {
        Self { horn: horn.into() }
    }
}

impl Default for Duck {
    fn default() -> Self {
        Self::new(DEFAULT_DUCK_CALL)
    }
}

impl Default for Cow {
    fn default() -> Self {
        Self::new(DEFAULT_COW_CALL)
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new(DEFAULT_CAR_HORN)
    }
}

impl Soundable for Duck {
    fn sound(&self, console: &mut dyn Console) -> Result<()> {
        console.line(&self.call)
    }
}

impl Soundable for Cow {
    fn sound(&self, console: &mut dyn Console) -> Result<()> {
        console.line(&self.call)
    }
}

impl Soundable for Car {
    fn sound(&self, console: &mut dyn Console) -> Result<()> {
        console.line(&self.horn)
    }
}

/// The three domain values both demo programs work with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineup {
    pub duck: Duck,
    pub cow: Cow,
    pub car: Car,
}
