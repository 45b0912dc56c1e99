//! Entity collection models for Splunk's Atom feed responses.
//!
//! Generic endpoints such as `/services/properties` or
//! `/servicesNS/<owner>/<app>/storage/passwords` answer with an Atom
//! `<feed>` of `<entry>` elements. Each entry's `<content>` holds a nested
//! `<s:dict>` that is flattened into a [`RestDictionary`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::RestMessage;

/// A feed of entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestResponse {
    pub title: String,
    pub id: String,
    pub updated: String,
    /// `opensearch:totalResults`, when Splunk reports it.
    pub total_results: Option<u64>,
    pub messages: Vec<RestMessage>,
    pub entries: Vec<RestEntry>,
}

impl RestResponse {
    /// Find an entry by its title.
    pub fn entry(&self, title: &str) -> Option<&RestEntry> {
        self.entries.iter().find(|e| e.title == title)
    }
}

impl fmt::Display for RestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} Id: {} Updated: {}",
            self.title, self.id, self.updated
        )
    }
}

/// A single `<entry>` of a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestEntry {
    pub title: String,
    pub id: String,
    pub updated: String,
    pub author: String,
    pub links: Vec<RestLink>,
    pub messages: Vec<RestMessage>,
    pub content: RestDictionary,
}

/// A `<link href="..." rel="..."/>` of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestLink {
    pub href: String,
    pub rel: String,
}

/// One flattened `<s:key>` of an entry's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestKey {
    pub name: String,
    pub value: String,
}

impl fmt::Display for RestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Flat key/value view of an entry's nested `<s:dict>` content.
///
/// Nested dictionaries become dotted names (`eai:acl.owner`). Lists of
/// plain values are joined with commas; lists holding dictionaries are
/// flattened with the item index (`key.0.field`). Keys keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RestDictionary {
    pub keys: Vec<RestKey>,
}

impl RestDictionary {
    /// Value of a key; the last one wins if Splunk repeats a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys
            .iter()
            .rev()
            .find(|k| k.name == name)
            .map(|k| k.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sorted name to value map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.keys
            .iter()
            .map(|k| (k.name.clone(), k.value.clone()))
            .collect()
    }
}
