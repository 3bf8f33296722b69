use crate::core::capability;
use crate::core::inspect;
use crate::core::reflective::ReflectiveDispatcher;
use crate::core::registry::TypeRegistry;
use crate::domain::model::Lineup;
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Duck, cow and car through the `Soundable` trait.
///
/// The argument list cannot be passed here: it is not `Soundable`, so such a
/// call would not compile.
pub struct CapabilityDemo {
    lineup: Lineup,
}

impl CapabilityDemo {
    pub fn new(lineup: Lineup) -> Self {
        Self { lineup }
    }

    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        tracing::info!("Running capability dispatch demo");

        capability::listen(&self.lineup.duck, console)?;
        capability::listen(&self.lineup.cow, console)?;
        capability::listen(&self.lineup.car, console)?;

        tracing::info!("Capability dispatch demo finished");
        Ok(())
    }
}

/// Duck, cow, car and the raw argument list through runtime lookup, then a
/// description of the duck and of the argument list.
pub struct ReflectiveDemo {
    lineup: Lineup,
    args: Vec<String>,
    registry: TypeRegistry,
}

impl ReflectiveDemo {
    pub fn new(lineup: Lineup, args: Vec<String>) -> Self {
        Self::with_registry(lineup, args, TypeRegistry::with_domain())
    }

    pub fn with_registry(lineup: Lineup, args: Vec<String>, registry: TypeRegistry) -> Self {
        Self {
            lineup,
            args,
            registry,
        }
    }

    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        tracing::info!("Running reflective dispatch demo");
        tracing::debug!("{} types registered, {} raw args", self.registry.len(), self.args.len());

        let dispatcher = ReflectiveDispatcher::new(&self.registry);
        dispatcher.listen(&self.lineup.duck, console);
        dispatcher.listen(&self.lineup.cow, console);
        dispatcher.listen(&self.lineup.car, console);
        dispatcher.listen(&self.args, console);

        inspect::describe(&self.registry, &self.lineup.duck, console)?;
        inspect::describe(&self.registry, &self.args, console)?;

        tracing::info!("Reflective dispatch demo finished");
        Ok(())
    }
}
