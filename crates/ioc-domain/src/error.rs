//! Error handling types

use thiserror::Error;

/// Boxed error used at capability boundaries (creators, constructors, loaders)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ioc container
#[derive(Error, Debug)]
pub enum Error {
    /// No container on the lookup chain can resolve the key
    #[error("Unknown element: {key}")]
    UnknownElement {
        /// The element key that was requested
        key: String,
    },

    /// A definition facet has the wrong shape for what was asked of it
    #[error("Bad definition for element '{alias}': {reason}")]
    BadElementDefinition {
        /// Alias of the offending definition
        alias: String,
        /// What is wrong with the definition
        reason: String,
    },

    /// A well-formed definition failed while creating its element
    #[error("Failed to create element '{alias}': {reason}")]
    ElementCreationFailure {
        /// Alias of the definition being created
        alias: String,
        /// Description of the failure
        reason: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxError>,
    },

    /// An element depends on itself through its argument chain
    #[error("Cyclic dependency on element '{key}': {}", chain.join(" -> "))]
    CyclicDependency {
        /// The key that was re-entered
        key: String,
        /// Keys on the resolution stack, ending with the re-entered key
        chain: Vec<String>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Element resolution errors
impl Error {
    /// Create an unknown element error
    pub fn unknown_element<S: Into<String>>(key: S) -> Self {
        Self::UnknownElement { key: key.into() }
    }

    /// Create a bad definition error
    pub fn bad_definition<A: Into<String>, R: Into<String>>(alias: A, reason: R) -> Self {
        Self::BadElementDefinition {
            alias: alias.into(),
            reason: reason.into(),
        }
    }

    /// Create an element creation failure without an underlying cause
    pub fn creation_failure<A: Into<String>, R: Into<String>>(alias: A, reason: R) -> Self {
        Self::ElementCreationFailure {
            alias: alias.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an element creation failure that keeps its cause
    pub fn creation_failure_with_source<A, R>(alias: A, reason: R, source: BoxError) -> Self
    where
        A: Into<String>,
        R: Into<String>,
    {
        Self::ElementCreationFailure {
            alias: alias.into(),
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic_dependency<S: Into<String>>(key: S, chain: Vec<String>) -> Self {
        Self::CyclicDependency {
            key: key.into(),
            chain,
        }
    }

    /// Recover a container error that crossed a capability boundary as a
    /// boxed error, or wrap a foreign one as a creation failure.
    pub fn from_capability<A, R>(alias: A, reason: R, error: BoxError) -> Self
    where
        A: Into<String>,
        R: Into<String>,
    {
        match error.downcast::<Error>() {
            Ok(inner) => *inner,
            Err(foreign) => Self::creation_failure_with_source(alias, reason, foreign),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Configuration {
            message: format!("JSON parsing error: {source}"),
            source: Some(Box::new(source)),
        }
    }
}
