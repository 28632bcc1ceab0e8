//! Run configuration records
//!
//! On disk the namespace settings sit next to `recursive` under the
//! `config` key; there is no `namespace:` level.

use serde::{Deserialize, Serialize};

/// Top-level envelope matching the document's `config` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub config: Config,
}

/// Settings under the document's `config` key.
///
/// Booleans also accept the YAML 1.1 spellings (`yes`, `no`, `on`, `off`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run tests found in nested directories
    #[serde(deserialize_with = "scalar::bool_from_yaml11")]
    pub recursive: bool,

    #[serde(flatten)]
    pub namespace: NamespaceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { recursive: true, namespace: NamespaceConfig::default() }
    }
}

/// Namespace the tests run in, and its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Empty means the caller picks a name. Any scalar is taken as its text,
    /// so `name: 1234` is the namespace `"1234"`.
    #[serde(deserialize_with = "scalar::text_from_scalar")]
    pub name: String,

    /// Create a throwaway namespace for the run
    #[serde(deserialize_with = "scalar::bool_from_yaml11")]
    pub temporary: bool,

    /// Delete the namespace once the run finishes
    #[serde(rename = "autoremove", deserialize_with = "scalar::bool_from_yaml11")]
    pub auto_remove: bool,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self { name: String::new(), temporary: false, auto_remove: true }
    }
}

mod scalar {
    //! Lenient scalar decoding for hand-written run config files.
    //!
    //! Namespace fields arrive through `#[serde(flatten)]`, so these see
    //! buffered values and must go through `deserialize_any`.

    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    const TRUE_WORDS: &[&str] =
        &["y", "Y", "yes", "Yes", "YES", "true", "True", "TRUE", "on", "On", "ON"];
    const FALSE_WORDS: &[&str] =
        &["n", "N", "no", "No", "NO", "false", "False", "FALSE", "off", "Off", "OFF"];

    pub fn bool_from_yaml11<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BoolVisitor)
    }

    pub fn text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }

    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            if TRUE_WORDS.contains(&value) {
                Ok(true)
            } else if FALSE_WORDS.contains(&value) {
                Ok(false)
            } else {
                Err(E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_owned())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }
}
