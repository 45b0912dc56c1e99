//! Scheme descriptor returned to Splunk on `--scheme`.
//!
//! Splunk reads the scheme once, when the input is registered, to learn the
//! input's title and the arguments it accepts. Element names and their order
//! follow Splunk's modular input scheme schema; optional elements that are
//! not set are left out of the document.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// How events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamingMode {
    /// Plain text, one event per line.
    Simple,
    /// `<stream><event>...</event></stream>` documents.
    #[default]
    Xml,
}

impl StreamingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for StreamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Number,
    Boolean,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One setting the modular input accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Splunk validation rule, e.g. `is_pos_int('interval')`.
    pub validation: Option<String>,
    pub data_type: Option<DataType>,
    pub required_on_edit: Option<bool>,
    pub required_on_create: Option<bool>,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            validation: None,
            data_type: None,
            required_on_edit: None,
            required_on_create: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validation(mut self, rule: impl Into<String>) -> Self {
        self.validation = Some(rule.into());
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn required_on_edit(mut self, required: bool) -> Self {
        self.required_on_edit = Some(required);
        self
    }

    pub fn required_on_create(mut self, required: bool) -> Self {
        self.required_on_create = Some(required);
        self
    }
}

/// Description of the modular input and its arguments.
///
/// # Example
///
/// ```
/// use splunk_modinput::{Argument, DataType, Scheme};
///
/// let scheme = Scheme::new("Google Fitness")
///     .description("Pull activity data")
///     .use_external_validation(true)
///     .arg(Argument::new("interval").data_type(DataType::Number));
/// let xml = scheme.to_xml().unwrap();
/// assert!(xml.starts_with("<scheme><title>Google Fitness</title>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub title: String,
    pub description: Option<String>,
    pub use_external_validation: bool,
    pub use_single_instance: Option<bool>,
    pub streaming_mode: StreamingMode,
    pub args: Vec<Argument>,
}

impl Scheme {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            use_external_validation: false,
            use_single_instance: None,
            streaming_mode: StreamingMode::default(),
            args: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn use_external_validation(mut self, enabled: bool) -> Self {
        self.use_external_validation = enabled;
        self
    }

    pub fn use_single_instance(mut self, enabled: bool) -> Self {
        self.use_single_instance = Some(enabled);
        self
    }

    pub fn streaming_mode(mut self, mode: StreamingMode) -> Self {
        self.streaming_mode = mode;
        self
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    /// Add an argument to a scheme that is already built.
    pub fn add_arg(&mut self, arg: Argument) {
        self.args.push(arg);
    }

    /// Render the scheme as the XML document Splunk expects.
    pub fn to_xml(&self) -> Result<String> {
        let doc = SchemeDoc {
            title: &self.title,
            description: self.description.as_deref(),
            use_external_validation: self.use_external_validation,
            use_single_instance: self.use_single_instance,
            streaming_mode: self.streaming_mode.as_str(),
            endpoint: EndpointDoc {
                args: ArgsDoc {
                    arg: self.args.iter().map(ArgDoc::from).collect(),
                },
            },
        };
        Ok(quick_xml::se::to_string(&doc)?)
    }
}

#[derive(Serialize)]
#[serde(rename = "scheme")]
struct SchemeDoc<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    use_external_validation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_single_instance: Option<bool>,
    streaming_mode: &'a str,
    endpoint: EndpointDoc<'a>,
}

#[derive(Serialize)]
struct EndpointDoc<'a> {
    args: ArgsDoc<'a>,
}

#[derive(Serialize)]
struct ArgsDoc<'a> {
    arg: Vec<ArgDoc<'a>>,
}

#[derive(Serialize)]
struct ArgDoc<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_on_edit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_on_create: Option<bool>,
}

impl<'a> From<&'a Argument> for ArgDoc<'a> {
    fn from(arg: &'a Argument) -> Self {
        Self {
            name: &arg.name,
            title: arg.title.as_deref(),
            description: arg.description.as_deref(),
            validation: arg.validation.as_deref(),
            data_type: arg.data_type.map(|d| d.as_str()),
            required_on_edit: arg.required_on_edit,
            required_on_create: arg.required_on_create,
        }
    }
}
