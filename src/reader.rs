use crate::{
    error::{EnvError, Outcome},
    parse::parser_for,
    source::{DotenvFile, ProcessEnv, Source},
    value::EnvValue,
};
use std::path::Path;

/// Reads typed values from a [`Source`]
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use typed_env::{EnvReader, Outcome};
///
/// let vars = HashMap::from([("PORT".to_string(), "9090".to_string())]);
/// let reader = EnvReader::with_source(vars);
///
/// assert_eq!(reader.get("PORT", 8080u16), 9090);
/// assert_eq!(reader.must_get("HOST", String::from("localhost")).1, Outcome::Unset);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvReader<S = ProcessEnv> {
    source: S,
}

impl EnvReader<ProcessEnv> {
    /// A reader over the process environment
    pub fn new() -> Self {
        Self { source: ProcessEnv }
    }
}

impl EnvReader<DotenvFile> {
    /// A reader over a dotenv file, without touching the process environment
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        Ok(Self::with_source(DotenvFile::from_path(path)?))
    }
}

impl<S: Source> EnvReader<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up `key` and convert it to the type of `default`
    ///
    /// The returned value is `default` unless the outcome is [`Outcome::Parsed`].
    /// A variable that is set to the empty string counts as unset.
    pub fn resolve<T: EnvValue>(&self, key: &str, default: T) -> (T, Outcome) {
        let raw = match self.source.lookup(key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tracing::trace!(key, "variable is unset");
                return (default, Outcome::Unset);
            }
        };

        let Some(parser) = parser_for(T::KIND) else {
            let error = EnvError::UnsupportedKind {
                key: key.to_string(),
                kind: T::KIND,
                type_name: std::any::type_name::<T>(),
            };
            tracing::trace!(key, kind = T::KIND.name(), "kind cannot be parsed");
            return (default, Outcome::UnsupportedKind(error));
        };

        let scalar = match parser(&raw) {
            Ok(scalar) => scalar,
            Err(e) => {
                let error = EnvError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                    kind: T::KIND,
                    reason: e.to_string(),
                };
                tracing::trace!(key, kind = T::KIND.name(), "variable did not parse");
                return (default, Outcome::ParseFailed(error));
            }
        };

        let from = scalar.kind();
        match T::from_scalar(scalar) {
            Some(value) => {
                tracing::trace!(key, kind = T::KIND.name(), "parsed variable");
                (value, Outcome::Parsed)
            }
            None => {
                let error = EnvError::Conversion {
                    key: key.to_string(),
                    from,
                    to: std::any::type_name::<T>(),
                };
                tracing::trace!(key, kind = T::KIND.name(), "parsed value was rejected");
                (default, Outcome::ParseFailed(error))
            }
        }
    }

    /// Read `key` as the type of `default`, falling back to `default` on any failure
    pub fn get<T: EnvValue>(&self, key: &str, default: T) -> T {
        let (value, outcome) = self.resolve(key, default);
        if let Some(error) = outcome.error() {
            tracing::debug!(key, error = %error, "using default value");
        }
        value
    }

    /// Read `key` as the type of `default`, reporting how the value was obtained
    pub fn must_get<T: EnvValue>(&self, key: &str, default: T) -> (T, Outcome) {
        self.resolve(key, default)
    }

    /// Like [`must_get`](Self::must_get), but turns failures into an `Err`
    ///
    /// An unset variable is not a failure and yields `Ok(default)`.
    pub fn try_get<T: EnvValue>(&self, key: &str, default: T) -> Result<T, EnvError> {
        let (value, outcome) = self.resolve(key, default);
        match outcome.into_error() {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }
}

/// Look up `key` in the process environment and convert it to the type of `default`
pub fn resolve<T: EnvValue>(key: &str, default: T) -> (T, Outcome) {
    EnvReader::new().resolve(key, default)
}

/// Read `key` from the process environment, falling back to `default` on any failure
///
/// # Example
/// ```rust
/// let workers = typed_env::get("TYPED_ENV_DOC_WORKERS", 4usize);
/// assert_eq!(workers, 4);
/// ```
pub fn get<T: EnvValue>(key: &str, default: T) -> T {
    EnvReader::new().get(key, default)
}

/// Read `key` from the process environment, reporting how the value was obtained
///
/// # Example
/// ```rust
/// use typed_env::Outcome;
///
/// let (debug, outcome) = typed_env::must_get("TYPED_ENV_DOC_DEBUG", false);
/// assert!(!debug);
/// assert_eq!(outcome, Outcome::Unset);
/// ```
pub fn must_get<T: EnvValue>(key: &str, default: T) -> (T, Outcome) {
    EnvReader::new().must_get(key, default)
}

/// Read `key` from the process environment, returning an error if it is set but invalid
pub fn try_get<T: EnvValue>(key: &str, default: T) -> Result<T, EnvError> {
    EnvReader::new().try_get(key, default)
}
