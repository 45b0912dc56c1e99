//! XML response decoding.
//!
//! Splunk's management API answers in Atom XML by default. These helpers
//! decode the three shapes this crate consumes:
//! - `<response>` from the login endpoint
//! - `<feed>` entity listings, with each entry's nested `<s:dict>` flattened
//! - `<messages>` blocks in error bodies (XML or JSON)
//!
//! Element names are matched without their namespace prefix, so
//! `<s:dict>` and `<dict>` decode the same way.

use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::models::common::MessageType;
use crate::models::{RestDictionary, RestEntry, RestKey, RestLink, RestMessage, RestResponse, SessionKey};

/// Decode a login response.
///
/// # Errors
///
/// Returns [`ClientError::AuthFailed`] when the response carries no session
/// key, using Splunk's message when there is one.
pub fn parse_login(body: &str) -> Result<SessionKey> {
    let doc: LoginDoc = quick_xml::de::from_str(body)?;
    let messages = doc.messages.into_messages();

    match doc.session_key.map(|k| k.trim().to_string()) {
        Some(key) if !key.is_empty() => Ok(SessionKey::new(key).with_messages(messages)),
        _ => Err(ClientError::AuthFailed(
            messages
                .first()
                .map(|m| m.text.clone())
                .unwrap_or_else(|| "Missing sessionKey in response".to_string()),
        )),
    }
}

/// Decode an Atom feed of entities.
pub fn parse_feed(body: &str) -> Result<RestResponse> {
    let doc: FeedDoc = quick_xml::de::from_str(body)?;
    Ok(doc.into())
}

/// Extract Splunk's messages from an error body, XML or JSON.
///
/// Returns an empty list for bodies in neither format.
pub fn parse_error_messages(body: &str) -> Vec<RestMessage> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        serde_json::from_str::<JsonMessagesDoc>(trimmed)
            .map(|doc| {
                doc.messages
                    .into_iter()
                    .map(|m| RestMessage {
                        message_type: MessageType::from(m.message_type.as_str()),
                        text: m.text,
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else if trimmed.starts_with('<') {
        quick_xml::de::from_str::<ErrorDoc>(trimmed)
            .map(|doc| doc.messages.into_messages())
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

// Wire shapes

#[derive(Debug, Default, Deserialize)]
struct MessagesDoc {
    #[serde(default, rename = "msg")]
    msgs: Vec<MsgDoc>,
}

impl MessagesDoc {
    fn into_messages(self) -> Vec<RestMessage> {
        self.msgs
            .into_iter()
            .map(|m| RestMessage {
                message_type: MessageType::from(m.message_type.as_str()),
                text: m.text,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MsgDoc {
    #[serde(rename = "@type", default)]
    message_type: String,
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct LoginDoc {
    #[serde(rename = "sessionKey", default)]
    session_key: Option<String>,
    #[serde(default)]
    messages: MessagesDoc,
}

#[derive(Debug, Deserialize)]
struct ErrorDoc {
    #[serde(default)]
    messages: MessagesDoc,
}

#[derive(Debug, Deserialize)]
struct JsonMessagesDoc {
    #[serde(default)]
    messages: Vec<JsonMessageDoc>,
}

#[derive(Debug, Deserialize)]
struct JsonMessageDoc {
    #[serde(rename = "type", default)]
    message_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct FeedDoc {
    #[serde(default)]
    title: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    updated: String,
    #[serde(rename = "totalResults", default)]
    total_results: Option<u64>,
    #[serde(default)]
    messages: MessagesDoc,
    #[serde(default, rename = "entry")]
    entries: Vec<EntryDoc>,
}

#[derive(Debug, Deserialize)]
struct EntryDoc {
    #[serde(default)]
    title: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    updated: String,
    #[serde(default, rename = "link")]
    links: Vec<LinkDoc>,
    #[serde(default)]
    author: AuthorDoc,
    #[serde(default)]
    messages: MessagesDoc,
    #[serde(default)]
    content: ContentDoc,
}

#[derive(Debug, Deserialize)]
struct LinkDoc {
    #[serde(rename = "@href", default)]
    href: String,
    #[serde(rename = "@rel", default)]
    rel: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorDoc {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDoc {
    #[serde(default)]
    dict: DictDoc,
}

#[derive(Debug, Default, Deserialize)]
struct DictDoc {
    #[serde(default, rename = "key")]
    keys: Vec<KeyDoc>,
}

#[derive(Debug, Deserialize)]
struct KeyDoc {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "$value", default)]
    values: Vec<ValueDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct ListDoc {
    #[serde(default, rename = "item")]
    items: Vec<ItemDoc>,
}

#[derive(Debug, Deserialize)]
struct ItemDoc {
    #[serde(rename = "$value", default)]
    values: Vec<ValueDoc>,
}

#[derive(Debug, Deserialize)]
enum ValueDoc {
    #[serde(rename = "$text")]
    Text(String),
    #[serde(rename = "dict")]
    Dict(DictDoc),
    #[serde(rename = "list")]
    List(ListDoc),
}

impl From<FeedDoc> for RestResponse {
    fn from(doc: FeedDoc) -> Self {
        Self {
            title: doc.title,
            id: doc.id,
            updated: doc.updated,
            total_results: doc.total_results,
            messages: doc.messages.into_messages(),
            entries: doc.entries.into_iter().map(RestEntry::from).collect(),
        }
    }
}

impl From<EntryDoc> for RestEntry {
    fn from(doc: EntryDoc) -> Self {
        let mut keys = Vec::new();
        flatten_dict(None, doc.content.dict, &mut keys);

        Self {
            title: doc.title,
            id: doc.id,
            updated: doc.updated,
            author: doc.author.name,
            links: doc
                .links
                .into_iter()
                .map(|l| RestLink {
                    href: l.href,
                    rel: l.rel,
                })
                .collect(),
            messages: doc.messages.into_messages(),
            content: RestDictionary { keys },
        }
    }
}

fn flatten_dict(prefix: Option<&str>, dict: DictDoc, out: &mut Vec<RestKey>) {
    for key in dict.keys {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key.name),
            None => key.name,
        };
        if key.values.is_empty() {
            out.push(RestKey {
                name,
                value: String::new(),
            });
        } else {
            flatten_values(&name, key.values, out);
        }
    }
}

fn flatten_values(name: &str, values: Vec<ValueDoc>, out: &mut Vec<RestKey>) {
    for value in significant(values) {
        match value {
            ValueDoc::Text(text) => out.push(RestKey {
                name: name.to_string(),
                value: text,
            }),
            ValueDoc::Dict(dict) => flatten_dict(Some(name), dict, out),
            ValueDoc::List(list) => flatten_list(name, list, out),
        }
    }
}

fn flatten_list(name: &str, list: ListDoc, out: &mut Vec<RestKey>) {
    let items: Vec<Vec<ValueDoc>> = list
        .items
        .into_iter()
        .map(|item| significant(item.values))
        .collect();
    let all_scalar = items
        .iter()
        .all(|values| matches!(values.as_slice(), [] | [ValueDoc::Text(_)]));

    if all_scalar {
        let joined = items
            .into_iter()
            .map(|values| match values.into_iter().next() {
                Some(ValueDoc::Text(text)) => text,
                _ => String::new(),
            })
            .collect::<Vec<_>>()
            .join(",");
        out.push(RestKey {
            name: name.to_string(),
            value: joined,
        });
    } else {
        for (i, values) in items.into_iter().enumerate() {
            flatten_values(&format!("{}.{}", name, i), values, out);
        }
    }
}

// Indentation between child elements is not a value.
fn significant(values: Vec<ValueDoc>) -> Vec<ValueDoc> {
    let has_children = values
        .iter()
        .any(|v| matches!(v, ValueDoc::Dict(_) | ValueDoc::List(_)));
    if !has_children {
        return values;
    }
    values
        .into_iter()
        .filter(|v| !matches!(v, ValueDoc::Text(t) if t.trim().is_empty()))
        .collect()
}
