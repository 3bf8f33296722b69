//! Runtime type metadata.
//!
//! Rust has no runtime reflection, so each type that wants to be discovered
//! describes itself once with a [`TypeInfo`]: its name, its field names and
//! its zero-argument methods as type-erased invokers over `&dyn Any`.

use crate::domain::model::{Car, Cow, Duck};
use crate::domain::ports::{Console, Soundable};
use crate::utils::error::{DispatchError, Result};
use std::any::Any;
use std::fmt;

type Invoker = Box<dyn Fn(&dyn Any, &mut dyn Console) -> Result<()> + Send + Sync>;

/// A zero-argument operation discovered by name.
pub struct Method {
    name: &'static str,
    invoker: Invoker,
}

impl Method {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn invoke(&self, target: &dyn Any, console: &mut dyn Console) -> Result<()> {
        (self.invoker)(target, console)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("name", &self.name).finish()
    }
}

#[derive(Debug)]
pub struct TypeInfo {
    name: String,
    fields: Vec<&'static str>,
    methods: Vec<Method>,
}

impl TypeInfo {
    pub fn builder(name: impl Into<String>) -> TypeInfoBuilder {
        TypeInfoBuilder {
            info: TypeInfo {
                name: name.into(),
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Metadata for a type nobody registered: just the compiler's name for it.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().copied()
    }

    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(Method::name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

pub struct TypeInfoBuilder {
    info: TypeInfo,
}

impl TypeInfoBuilder {
    pub fn field(mut self, name: &'static str) -> Self {
        self.info.fields.push(name);
        self
    }

    /// Adds a zero-argument method. If two methods share a name, lookup
    /// returns the first one.
    pub fn method<T, F>(mut self, name: &'static str, f: F) -> Self
    where
        T: Any,
        F: Fn(&T, &mut dyn Console) -> Result<()> + Send + Sync + 'static,
    {
        let expected = self.info.name.clone();
        let invoker: Invoker = Box::new(move |target: &dyn Any, console: &mut dyn Console| {
            let target = target
                .downcast_ref::<T>()
                .ok_or_else(|| DispatchError::TypeMismatch {
                    expected: expected.clone(),
                    method: name.to_string(),
                })?;
            f(target, console)
        });
        self.info.methods.push(Method { name, invoker });
        self
    }

    pub fn build(self) -> TypeInfo {
        self.info
    }
}

/// Types that can describe themselves to the registry.
pub trait Reflect: Any {
    fn type_info() -> TypeInfo
    where
        Self: Sized;
}

impl Reflect for Duck {
    fn type_info() -> TypeInfo {
        TypeInfo::builder("Duck")
            .field("call")
            .method("sound", |duck: &Duck, console| duck.sound(console))
            .build()
    }
}

impl Reflect for Cow {
    fn type_info() -> TypeInfo {
        TypeInfo::builder("Cow")
            .field("call")
            .method("sound", |cow: &Cow, console| cow.sound(console))
            .build()
    }
}

impl Reflect for Car {
    fn type_info() -> TypeInfo {
        TypeInfo::builder("Car")
            .field("horn")
            .method("sound", |car: &Car, console| car.sound(console))
            .build()
    }
}

// The argument list: discoverable, but it has no `sound`.
impl Reflect for Vec<String> {
    fn type_info() -> TypeInfo {
        TypeInfo::builder("Vec<String>")
            .method("len", |args: &Vec<String>, console| {
                console.line(&args.len().to_string())
            })
            .method("is_empty", |args: &Vec<String>, console| {
                console.line(&args.is_empty().to_string())
            })
            .method("first", |args: &Vec<String>, console| {
                console.line(&format!("{:?}", args.first()))
            })
            .method("last", |args: &Vec<String>, console| {
                console.line(&format!("{:?}", args.last()))
            })
            .build()
    }
}
