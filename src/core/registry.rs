use crate::core::meta::{Method, Reflect, TypeInfo};
use crate::domain::model::{Car, Cow, Duck};
use crate::domain::ports::Console;
use crate::utils::error::{DispatchError, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

/// Type metadata keyed by `TypeId`.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<TypeId, TypeInfo>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 預先註冊參數列表型別 (`Vec<String>`)
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<Vec<String>>();
        registry
    }

    /// Builtins plus the duck, the cow and the car.
    pub fn with_domain() -> Self {
        let mut registry = Self::with_builtins();
        registry.register::<Duck>();
        registry.register::<Cow>();
        registry.register::<Car>();
        registry
    }

    pub fn register<T: Reflect>(&mut self) -> &mut Self {
        self.register_info::<T>(T::type_info())
    }

    pub fn register_info<T: Any>(&mut self, info: TypeInfo) -> &mut Self {
        let name = info.name().to_string();
        if self.types.insert(TypeId::of::<T>(), info).is_some() {
            tracing::debug!("Replaced type metadata for {}", name);
        } else {
            tracing::debug!("Registered type metadata for {}", name);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.types.contains_key(&TypeId::of::<T>())
    }

    pub fn lookup(&self, type_id: TypeId) -> Option<&TypeInfo> {
        self.types.get(&type_id)
    }

    /// Metadata for the value's runtime type, looking through a `Box<dyn Any>`.
    pub fn lookup_value(&self, value: &dyn Any) -> Option<&TypeInfo> {
        self.lookup(runtime_value(value).type_id())
    }

    /// Capability check: does the value's runtime type expose `name`?
    pub fn find_method(&self, value: &dyn Any, name: &str) -> Result<&Method> {
        let value = runtime_value(value);
        let info = self
            .lookup(value.type_id())
            .ok_or_else(|| DispatchError::UnknownType {
                type_id: value.type_id(),
            })?;

        info.method(name)
            .ok_or_else(|| DispatchError::MethodNotFound {
                type_name: info.name().to_string(),
                method: name.to_string(),
            })
    }

    /// Looks up `name` on the value's runtime type and calls it.
    ///
    /// Errors and panics raised by the method itself come back as
    /// `InvocationFailed` / `InvocationPanicked`; lookup failures come back
    /// as `UnknownType` / `MethodNotFound`.
    pub fn invoke(&self, value: &dyn Any, name: &str, console: &mut dyn Console) -> Result<()> {
        let value = runtime_value(value);
        let method = self.find_method(value, name)?;
        let type_name = self
            .lookup(value.type_id())
            .map(|info| info.name().to_string())
            .unwrap_or_default();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| method.invoke(value, console)));

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(DispatchError::InvocationFailed {
                type_name,
                method: name.to_string(),
                source: Box::new(source),
            }),
            Err(payload) => Err(DispatchError::InvocationPanicked {
                type_name,
                method: name.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

/// A `&Box<dyn Any>` coerced to `&dyn Any` reports the box's own type;
/// unwrap it so lookups see the value inside.
pub fn runtime_value(value: &dyn Any) -> &dyn Any {
    match value.downcast_ref::<Box<dyn Any>>() {
        Some(inner) => runtime_value(&**inner),
        None => value,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
