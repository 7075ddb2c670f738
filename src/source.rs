//! Where raw values come from.
//!
//! The process environment is the default, but anything that maps a key to
//! a string can stand in for it: a map in tests, a `.env` file that should
//! not leak into the process, or several of these layered together.

use std::{
    collections::{BTreeMap, HashMap},
    env,
    io::Read,
    path::Path,
};

/// A lookup of raw string values by key
pub trait Source {
    /// Returns `None` if the key is not present
    fn lookup(&self, key: &str) -> Option<String>;

    /// Fall back to `other` for keys this source does not have
    fn or<B: Source>(self, other: B) -> Layered<Self, B>
    where
        Self: Sized,
    {
        Layered {
            first: self,
            second: other,
        }
    }
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Names the platform cannot hold are never set
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }

        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Source for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<F> Source for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

// Borrowed sources are listed one by one, a blanket `&S` impl would overlap
// with closures since `&F` is itself a closure.
macro_rules! impl_borrowed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Source for &$ty {
                fn lookup(&self, key: &str) -> Option<String> {
                    (**self).lookup(key)
                }
            }
        )*
    };
}

impl_borrowed!(
    ProcessEnv,
    HashMap<String, String>,
    BTreeMap<String, String>,
    DotenvFile,
);

impl<A: Source, B: Source> Source for &Layered<A, B> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Variables read from a dotenv file, kept out of the process environment
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Read a dotenv file such as `.env`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { vars })
    }

    /// Read dotenv formatted data from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, dotenvy::Error> {
        let vars = dotenvy::from_read_iter(reader).collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Source for DotenvFile {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Two sources, the first one that has a non-empty value wins
///
/// An empty value in the first source does not hide the second one, the
/// same way an empty variable counts as unset.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    first: A,
    second: B,
}

impl<A: Source, B: Source> Source for Layered<A, B> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.first
            .lookup(key)
            .filter(|value| !value.is_empty())
            .or_else(|| self.second.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_lookup() {
        let source = map(&[("PORT", "8080")]);
        assert_eq!(source.lookup("PORT"), Some("8080".to_string()));
        assert_eq!(source.lookup("HOST"), None);
    }

    #[test]
    fn test_closure_lookup() {
        let source = |key: &str| (key == "DEBUG").then(|| "true".to_string());
        assert_eq!(source.lookup("DEBUG"), Some("true".to_string()));
        assert_eq!(source.lookup("PORT"), None);

        let borrowed = &source;
        assert_eq!(borrowed.lookup("DEBUG"), Some("true".to_string()));
    }

    #[test]
    fn test_borrowed_map_lookup() {
        let vars = map(&[("PORT", "8080")]);
        let borrowed = &vars;
        assert_eq!(borrowed.lookup("PORT"), Some("8080".to_string()));
    }

    #[test]
    fn test_process_env_malformed_keys() {
        assert_eq!(ProcessEnv.lookup(""), None);
        assert_eq!(ProcessEnv.lookup("A=B"), None);
        assert_eq!(ProcessEnv.lookup("A\0B"), None);
    }

    #[test]
    fn test_process_env_missing_key() {
        assert_eq!(ProcessEnv.lookup("TYPED_ENV_SOURCE_NEVER_SET"), None);
    }

    #[test]
    fn test_dotenv_from_reader() {
        let data = "# comment\nPORT=8080\nHOST=\"localhost\"\nEMPTY=\n";
        let source = DotenvFile::from_reader(data.as_bytes()).unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.lookup("PORT"), Some("8080".to_string()));
        assert_eq!(source.lookup("HOST"), Some("localhost".to_string()));
        assert_eq!(source.lookup("EMPTY"), Some(String::new()));
        assert_eq!(source.lookup("MISSING"), None);
    }

    #[test]
    fn test_dotenv_missing_file() {
        let result = DotenvFile::from_path("./does-not-exist.env");
        assert!(result.is_err());
    }

    #[test]
    fn test_layered_first_wins() {
        let source = map(&[("PORT", "9090")]).or(map(&[("PORT", "8080"), ("HOST", "localhost")]));

        assert_eq!(source.lookup("PORT"), Some("9090".to_string()));
        assert_eq!(source.lookup("HOST"), Some("localhost".to_string()));
        assert_eq!(source.lookup("DEBUG"), None);
    }

    #[test]
    fn test_layered_empty_falls_through() {
        let source = map(&[("PORT", "")]).or(map(&[("PORT", "9")]));
        assert_eq!(source.lookup("PORT"), Some("9".to_string()));

        let both_empty = map(&[("PORT", "")]).or(map(&[("PORT", "")]));
        assert_eq!(both_empty.lookup("PORT"), Some(String::new()));
    }
}
