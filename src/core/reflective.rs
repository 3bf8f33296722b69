use crate::core::registry::TypeRegistry;
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::any::Any;

pub const SOUND_METHOD: &str = "sound";
pub const COULD_NOT_INVOKE: &str = "Could not invoke sound.";

/// Finds `sound` on a value at runtime instead of through the trait.
#[derive(Debug, Clone, Copy)]
pub struct ReflectiveDispatcher<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> ReflectiveDispatcher<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Same lookup as `listen`, but the reason for a failure is kept.
    pub fn try_listen(&self, value: &dyn Any, console: &mut dyn Console) -> Result<()> {
        self.registry.invoke(value, SOUND_METHOD, console)
    }

    /// Never fails: any lookup or invocation problem prints
    /// `Could not invoke sound.` and returns.
    pub fn listen(&self, value: &dyn Any, console: &mut dyn Console) {
        if let Err(e) = self.try_listen(value, console) {
            tracing::debug!("Reflective dispatch failed: {}", e);
            if let Err(write_err) = console.line(COULD_NOT_INVOKE) {
                tracing::warn!("Could not print dispatch diagnostic: {}", write_err);
            }
        }
    }
}
