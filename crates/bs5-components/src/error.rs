//! Render error types.

/// Error raised while rendering a component tree.
///
/// All variants describe template-authoring mistakes. None of them are
/// recoverable: the render of the affected subtree is aborted and the error
/// propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A component requires context that no ancestor provided.
    #[error("'{component}' must be used as a child of '{ancestor}' component")]
    MissingContext {
        /// Component that performed the lookup.
        component: &'static str,
        /// Component expected to provide the context.
        ancestor: &'static str,
    },
    /// Context was found but the provider disabled it for this depth.
    #[error("'{component}' must be a direct child of '{ancestor}' component")]
    InvalidNesting {
        /// Component that performed the lookup.
        component: &'static str,
        /// Component expected to be the direct parent.
        ancestor: &'static str,
    },
    /// The nearest frame with this name holds a value of another type.
    #[error("context value '{name}' has an unexpected type")]
    ContextType {
        /// Context key.
        name: String,
    },
    /// Two siblings registered the same key with their parent.
    #[error("'{component}' key '{key}' is already used by a sibling")]
    DuplicateKey {
        /// Component that tried to register.
        component: &'static str,
        /// The colliding key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_message() {
        let err = RenderError::MissingContext {
            component: "Tab",
            ancestor: "Tabs",
        };
        assert_eq!(
            err.to_string(),
            "'Tab' must be used as a child of 'Tabs' component"
        );
    }

    #[test]
    fn test_invalid_nesting_message_differs() {
        let missing = RenderError::MissingContext {
            component: "Tab",
            ancestor: "Tabs",
        };
        let nested = RenderError::InvalidNesting {
            component: "Tab",
            ancestor: "Tabs",
        };
        assert_eq!(
            nested.to_string(),
            "'Tab' must be a direct child of 'Tabs' component"
        );
        assert_ne!(missing.to_string(), nested.to_string());
    }
}
