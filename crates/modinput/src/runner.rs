//! Process entry point for a modular input.
//!
//! Splunk starts the executable in one of three ways:
//! - `--scheme`: print the [`Scheme`] and exit
//! - `--validate-arguments`: read a [`ValidationDefinition`] from stdin and
//!   exit non-zero, with an `<error>` document on stdout, if it is rejected
//! - no arguments: read the [`ModInputConfig`] from stdin and stream events
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use splunk_modinput::{Event, EventWriter, ModInputConfig, ModularInput, Scheme, run};
//!
//! struct Heartbeat;
//!
//! impl ModularInput for Heartbeat {
//!     fn scheme(&self) -> Scheme {
//!         Scheme::new("Heartbeat")
//!     }
//!
//!     fn stream_events<W: Write>(
//!         &mut self,
//!         config: &ModInputConfig,
//!         events: &mut EventWriter<W>,
//!     ) -> anyhow::Result<()> {
//!         for stanza in &config.stanzas {
//!             events.write_event(&Event::new("alive").stanza(stanza.name()))?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! if let Err(e) = run(&mut Heartbeat, &args, std::io::stdin(), std::io::stdout()) {
//!     eprintln!("{e}");
//!     std::process::exit(1);
//! }
//! ```

use std::io::{Read, Write};

use quick_xml::Writer;
use quick_xml::events::BytesText;
use tracing::{debug, warn};

use crate::config::{ModInputConfig, ValidationDefinition};
use crate::error::{ModInputError, Result};
use crate::event::EventWriter;
use crate::scheme::Scheme;

/// Behaviour Splunk expects from a modular input.
pub trait ModularInput {
    /// Scheme printed on `--scheme`.
    fn scheme(&self) -> Scheme;

    /// Check a configuration before Splunk saves it.
    ///
    /// Only called when the scheme sets `use_external_validation`. The
    /// returned message is shown to the user. Accepts everything by default.
    fn validate(&self, _definition: &ValidationDefinition) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Produce events for the configured stanzas.
    fn stream_events<W: Write>(
        &mut self,
        config: &ModInputConfig,
        events: &mut EventWriter<W>,
    ) -> anyhow::Result<()>;
}

/// What Splunk asked the process to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Scheme,
    ValidateArguments,
    Stream,
}

impl RunMode {
    /// Determine the mode from the process arguments, without the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match args.into_iter().next() {
            None => Ok(Self::Stream),
            Some(arg) => match arg.as_ref() {
                "--scheme" => Ok(Self::Scheme),
                "--validate-arguments" => Ok(Self::ValidateArguments),
                other => Err(ModInputError::UnknownMode(other.to_string())),
            },
        }
    }
}

/// Run a modular input for one Splunk invocation.
pub fn run<M, I, S, R, W>(input: &mut M, args: I, stdin: R, mut stdout: W) -> Result<()>
where
    M: ModularInput,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Read,
    W: Write,
{
    let mode = RunMode::from_args(args)?;
    debug!(?mode, "Modular input invoked");

    match mode {
        RunMode::Scheme => {
            let xml = input.scheme().to_xml()?;
            stdout.write_all(xml.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        RunMode::ValidateArguments => {
            let definition = ValidationDefinition::from_reader(stdin)?;
            match input.validate(&definition) {
                Ok(()) => Ok(()),
                Err(message) => {
                    warn!(item = definition.item.name(), "Configuration rejected: {}", message);
                    write_validation_error(&mut stdout, &message)?;
                    Err(ModInputError::Validation(message))
                }
            }
        }
        RunMode::Stream => {
            let config = ModInputConfig::from_reader(stdin)?;
            let mut events = EventWriter::new(&mut stdout);
            let streamed = input.stream_events(&config, &mut events);
            // The stream is closed even when the input fails part way.
            events.close()?;
            streamed.map_err(ModInputError::Stream)
        }
    }
}

/// `<error><message>...</message></error>`, shown to the user by Splunk.
fn write_validation_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    let mut writer = Writer::new(&mut *out);
    writer
        .create_element("error")
        .write_inner_content(|w| {
            w.create_element("message")
                .write_text_content(BytesText::new(message))?;
            Ok(())
        })?;
    out.flush()?;
    Ok(())
}
