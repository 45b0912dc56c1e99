//! Startup and validation documents sent by Splunk on stdin.
//!
//! # Invariants
//! - Every [`Stanza`] returned from a decode has its lookup table built;
//!   a failed decode returns an error and never a partial configuration.
//! - Missing elements decode as empty strings and a missing
//!   `<configuration>` as zero stanzas.
//! - When a parameter name repeats, [`Stanza::params`] keeps every entry
//!   and [`Stanza::param`] returns the last value.

use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModInputError, Result};

/// A single `<param name="...">value</param>` from inputs.conf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// One configured instance of the modular input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stanza {
    name: String,
    params: Vec<Param>,
    #[serde(skip)]
    param_map: HashMap<String, String>,
}

impl Stanza {
    /// Create an empty stanza, e.g. `myScheme://aaa`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a parameter and record it in the lookup table.
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let param = Param {
            name: name.into(),
            value: value.into(),
        };
        self.param_map
            .insert(param.name.clone(), param.value.clone());
        self.params.push(param);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in document order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Name to value lookup table.
    pub fn param_map(&self) -> &HashMap<String, String> {
        &self.param_map
    }

    /// Look up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.param_map.get(name).map(String::as_str)
    }
}

/// Configuration passed on stdin when Splunk starts the modular input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModInputConfig {
    pub server_host: String,
    pub server_uri: String,
    /// Never serialized, so printing a configuration does not leak it.
    #[serde(skip_serializing)]
    pub session_key: String,
    pub checkpoint_dir: String,
    pub stanzas: Vec<Stanza>,
}

impl ModInputConfig {
    /// Decode the startup document from a reader, usually stdin.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: InputDoc = quick_xml::de::from_reader(BufReader::new(reader))?;
        Ok(doc.into())
    }

    /// Decode the startup document from a string.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc: InputDoc = quick_xml::de::from_str(xml)?;
        Ok(doc.into())
    }

    /// Find a stanza by its full name.
    pub fn stanza(&self, name: &str) -> Option<&Stanza> {
        self.stanzas.iter().find(|s| s.name == name)
    }
}

impl FromStr for ModInputConfig {
    type Err = ModInputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml(s)
    }
}

/// Document passed on stdin with `--validate-arguments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationDefinition {
    pub server_host: String,
    pub server_uri: String,
    #[serde(skip_serializing)]
    pub session_key: String,
    pub checkpoint_dir: String,
    /// The stanza being created or edited.
    pub item: Stanza,
}

impl ValidationDefinition {
    /// Decode the validation document from a reader, usually stdin.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: ItemsDoc = quick_xml::de::from_reader(BufReader::new(reader))?;
        Ok(doc.into())
    }

    /// Decode the validation document from a string.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc: ItemsDoc = quick_xml::de::from_str(xml)?;
        Ok(doc.into())
    }
}

impl FromStr for ValidationDefinition {
    type Err = ModInputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml(s)
    }
}

// Wire shapes. Kept private so the lookup tables are always built.

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(default)]
    server_host: String,
    #[serde(default)]
    server_uri: String,
    #[serde(default)]
    session_key: String,
    #[serde(default)]
    checkpoint_dir: String,
    #[serde(default)]
    configuration: ConfigurationDoc,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigurationDoc {
    #[serde(default, rename = "stanza")]
    stanzas: Vec<StanzaDoc>,
}

#[derive(Debug, Deserialize)]
struct ItemsDoc {
    #[serde(default)]
    server_host: String,
    #[serde(default)]
    server_uri: String,
    #[serde(default)]
    session_key: String,
    #[serde(default)]
    checkpoint_dir: String,
    item: StanzaDoc,
}

#[derive(Debug, Deserialize)]
struct StanzaDoc {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(default, rename = "param")]
    params: Vec<ParamDoc>,
}

#[derive(Debug, Deserialize)]
struct ParamDoc {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<StanzaDoc> for Stanza {
    fn from(doc: StanzaDoc) -> Self {
        let mut stanza = Stanza::new(doc.name);
        for param in doc.params {
            stanza.add_parameter(param.name, param.value);
        }
        stanza
    }
}

impl From<InputDoc> for ModInputConfig {
    fn from(doc: InputDoc) -> Self {
        let stanzas: Vec<Stanza> = doc
            .configuration
            .stanzas
            .into_iter()
            .map(Stanza::from)
            .collect();
        debug!(stanzas = stanzas.len(), "Decoded modular input configuration");

        Self {
            server_host: doc.server_host,
            server_uri: doc.server_uri,
            session_key: doc.session_key,
            checkpoint_dir: doc.checkpoint_dir,
            stanzas,
        }
    }
}

impl From<ItemsDoc> for ValidationDefinition {
    fn from(doc: ItemsDoc) -> Self {
        Self {
            server_host: doc.server_host,
            server_uri: doc.server_uri,
            session_key: doc.session_key,
            checkpoint_dir: doc.checkpoint_dir,
            item: doc.item.into(),
        }
    }
}
