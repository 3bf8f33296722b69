use crate::core::meta::TypeInfo;
use crate::core::registry::TypeRegistry;
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::any::Any;

pub const UNREGISTERED_TYPE_NAME: &str = "<unregistered>";

/// Prints the runtime type's name, then its fields and its methods.
///
/// A type missing from the registry is still described, as
/// `<unregistered>` with both sections empty.
pub fn describe(
    registry: &TypeRegistry,
    value: &dyn Any,
    console: &mut dyn Console,
) -> Result<()> {
    match registry.lookup_value(value) {
        Some(info) => print_type_info(info, console),
        None => {
            tracing::debug!("{:?} is not registered, describing it as opaque", value.type_id());
            print_type_info(&TypeInfo::opaque(UNREGISTERED_TYPE_NAME), console)
        }
    }
}

pub fn print_type_info(info: &TypeInfo, console: &mut dyn Console) -> Result<()> {
    console.line(&format!("Type Name: {}", info.name()))?;

    console.line("Fields")?;
    for field in info.fields() {
        console.line(field)?;
    }

    console.line("Methods")?;
    for method in info.methods() {
        console.line(method)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use crate::domain::model::Duck;

    #[test]
    fn test_describe_duck() {
        let registry = TypeRegistry::with_domain();
        let mut console = MemoryConsole::new();

        describe(&registry, &Duck::default(), &mut console).unwrap();

        assert_eq!(
            console.lines(),
            ["Type Name: Duck", "Fields", "call", "Methods", "sound"]
        );
    }

    #[test]
    fn test_describe_args() {
        let registry = TypeRegistry::with_domain();
        let args: Vec<String> = vec!["x".to_string()];
        let mut console = MemoryConsole::new();

        describe(&registry, &args, &mut console).unwrap();

        let lines = console.lines();
        assert_eq!(lines[0], "Type Name: Vec<String>");
        assert_eq!(lines[1], "Fields");
        assert_eq!(lines[2], "Methods");
        assert!(lines.iter().any(|l| l == "len"));
        assert!(!lines.iter().any(|l| l == "sound"));
    }

    #[test]
    fn test_describe_unregistered() {
        let registry = TypeRegistry::new();
        let mut console = MemoryConsole::new();

        describe(&registry, &7_i64, &mut console).unwrap();

        assert_eq!(console.lines(), ["Type Name: <unregistered>", "Fields", "Methods"]);
    }

    #[test]
    fn test_describe_boxed_value_by_runtime_type() {
        let registry = TypeRegistry::with_domain();
        let boxed: Box<dyn Any> = Box::new(Duck::default());
        let mut console = MemoryConsole::new();

        describe(&registry, &boxed, &mut console).unwrap();
        describe(&registry, &*boxed, &mut console).unwrap();

        let expected = ["Type Name: Duck", "Fields", "call", "Methods", "sound"];
        assert_eq!(&console.lines()[..5], expected);
        assert_eq!(&console.lines()[5..], expected);
    }
}
