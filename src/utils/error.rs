use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Type is not registered ({type_id:?})")]
    UnknownType { type_id: std::any::TypeId },

    #[error("No method `{method}` on {type_name}")]
    MethodNotFound { type_name: String, method: String },

    #[error("Method `{method}` of {expected} was handed a value of another type")]
    TypeMismatch { expected: String, method: String },

    #[error("Invoking `{method}` on {type_name} failed: {source}")]
    InvocationFailed {
        type_name: String,
        method: String,
        #[source]
        source: Box<DispatchError>,
    },

    #[error("Invoking `{method}` on {type_name} panicked: {message}")]
    InvocationPanicked {
        type_name: String,
        method: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DispatchError {
    /// 反射呼叫失敗（找不到型別/方法、呼叫出錯）
    pub fn is_dispatch_failure(&self) -> bool {
        matches!(
            self,
            DispatchError::UnknownType { .. }
                | DispatchError::MethodNotFound { .. }
                | DispatchError::TypeMismatch { .. }
                | DispatchError::InvocationFailed { .. }
                | DispatchError::InvocationPanicked { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DispatchError::IoError(_) => "Check that stdout is writable",
            DispatchError::UnknownType { .. } => {
                "Register the type with TypeRegistry::register before dispatching"
            }
            DispatchError::MethodNotFound { .. } => {
                "Add the method to the type's TypeInfo or use the Soundable trait"
            }
            DispatchError::TypeMismatch { .. } => {
                "Make sure the TypeInfo was registered under its own type"
            }
            DispatchError::InvocationFailed { .. } | DispatchError::InvocationPanicked { .. } => {
                "Inspect the method implementation; the failure came from inside it"
            }
            DispatchError::ConfigError { .. }
            | DispatchError::ConfigValidationError { .. }
            | DispatchError::InvalidConfigValueError { .. } => {
                "Fix the file pointed to by SOUND_DISPATCH_CONFIG or unset the variable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_failure_classification() {
        let missing = DispatchError::MethodNotFound {
            type_name: "Vec<String>".to_string(),
            method: "sound".to_string(),
        };
        assert!(missing.is_dispatch_failure());
        assert_eq!(missing.to_string(), "No method `sound` on Vec<String>");

        let config = DispatchError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!config.is_dispatch_failure());
    }

    #[test]
    fn test_invocation_failure_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = DispatchError::InvocationFailed {
            type_name: "Duck".to_string(),
            method: "sound".to_string(),
            source: Box::new(DispatchError::from(io)),
        };

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("closed"));
        assert!(err.is_dispatch_failure());
    }
}
