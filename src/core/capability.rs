use crate::domain::ports::{Console, Soundable};
use crate::utils::error::Result;

/// Makes `value` sound through the `Soundable` trait.
///
/// The bound is checked by the compiler, so there is no "missing method"
/// case at runtime. Anything that is not `Soundable` does not build:
///
/// ```compile_fail
/// use sound_dispatch::adapters::MemoryConsole;
/// use sound_dispatch::core::capability::listen;
///
/// let args: Vec<String> = std::env::args().collect();
/// let mut console = MemoryConsole::new();
/// listen(&args, &mut console).unwrap();
/// ```
///
/// ```
/// use sound_dispatch::adapters::MemoryConsole;
/// use sound_dispatch::core::capability::listen;
/// use sound_dispatch::domain::model::Duck;
///
/// let mut console = MemoryConsole::new();
/// listen(&Duck::default(), &mut console).unwrap();
/// assert_eq!(console.lines(), ["Quack!"]);
/// ```
pub fn listen<S: Soundable + ?Sized>(value: &S, console: &mut dyn Console) -> Result<()> {
    value.sound(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use crate::domain::model::{Car, Cow, Duck};

    #[test]
    fn test_listen_each_domain_value() {
        let mut console = MemoryConsole::new();

        listen(&Duck::default(), &mut console).unwrap();
        listen(&Cow::default(), &mut console).unwrap();
        listen(&Car::default(), &mut console).unwrap();

        assert_eq!(console.lines(), ["Quack!", "Mooo!", "Honk honk!"]);
    }

    #[test]
    fn test_listen_trait_objects() {
        let herd: Vec<Box<dyn Soundable>> = vec![
            Box::new(Cow::new("Moo?")),
            Box::new(Duck::new("Quack quack")),
        ];
        let mut console = MemoryConsole::new();

        for animal in &herd {
            listen(animal, &mut console).unwrap();
        }

        assert_eq!(console.lines(), ["Moo?", "Quack quack"]);
    }
}
