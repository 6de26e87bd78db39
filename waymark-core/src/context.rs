//! # Route Context
//!
//! The value handed to a registered handler when a target is resolved: the path
//! that matched and the parameters the target supplied.

use crate::error::ParamError;
use crate::params::{FromParam, Params};

/// The resolved path together with its parameters.
///
/// Built once per resolution and passed to the handler by value. It is never
/// mutated afterward and has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteContext {
    path: String,
    parameters: Params,
}

impl RouteContext {
    /// Create a context for `path` with the given parameters.
    pub fn new(path: impl Into<String>, parameters: Params) -> Self {
        Self {
            path: path.into(),
            parameters,
        }
    }

    /// The path string that was resolved.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All parameters supplied by the target; empty when it supplied none.
    pub fn parameters(&self) -> &Params {
        &self.parameters
    }

    /// Read a required parameter as `T`.
    pub fn get<T: FromParam>(&self, name: &str) -> Result<T, ParamError> {
        self.parameters.extract(name)
    }

    /// Read an optional parameter as `T`.
    pub fn get_opt<T: FromParam>(&self, name: &str) -> Result<Option<T>, ParamError> {
        self.parameters.extract_opt(name)
    }

    /// Split into path and parameters.
    pub fn into_parts(self) -> (String, Params) {
        (self.path, self.parameters)
    }
}
