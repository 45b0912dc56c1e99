//! XML event stream written to stdout in `xml` streaming mode.
//!
//! The stream is a single `<stream>` document. The opening tag is written
//! with the first event and the closing tag by [`EventWriter::close`], so a
//! run that produces no events writes nothing at all.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use tracing::warn;

use crate::error::Result;

/// One event for Splunk to index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub data: String,
    /// Stanza the event belongs to, e.g. `myScheme://aaa`.
    pub stanza: Option<String>,
    /// Seconds since the Unix epoch.
    pub time: Option<f64>,
    pub source: Option<String>,
    pub sourcetype: Option<String>,
    pub index: Option<String>,
    pub host: Option<String>,
    /// Part of an event that continues in later writes.
    pub unbroken: bool,
    /// Last chunk of an unbroken event.
    pub done: bool,
}

impl Event {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn stanza(mut self, stanza: impl Into<String>) -> Self {
        self.stanza = Some(stanza.into());
        self
    }

    pub fn time(mut self, epoch_secs: f64) -> Self {
        self.time = Some(epoch_secs);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn sourcetype(mut self, sourcetype: impl Into<String>) -> Self {
        self.sourcetype = Some(sourcetype.into());
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn unbroken(mut self, unbroken: bool) -> Self {
        self.unbroken = unbroken;
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Writes events to Splunk as an XML stream.
pub struct EventWriter<W: Write> {
    writer: Writer<W>,
    header_written: bool,
}

impl<W: Write> EventWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Writer::new(out),
            header_written: false,
        }
    }

    /// Write one event, opening the stream first if needed.
    ///
    /// A `time` that is NaN or infinite is left out so Splunk assigns one.
    pub fn write_event(&mut self, event: &Event) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_event(XmlEvent::Start(BytesStart::new("stream")))?;
            self.header_written = true;
        }

        let mut start = BytesStart::new("event");
        if let Some(stanza) = &event.stanza {
            start.push_attribute(("stanza", stanza.as_str()));
        }
        if event.unbroken {
            start.push_attribute(("unbroken", "1"));
        }
        self.writer.write_event(XmlEvent::Start(start))?;

        match event.time {
            Some(time) if time.is_finite() => {
                self.text_element("time", &time.to_string())?;
            }
            Some(time) => warn!(time, "Dropping non-finite event time"),
            None => {}
        }
        self.text_element("data", &event.data)?;
        let optional = [
            ("source", &event.source),
            ("sourcetype", &event.sourcetype),
            ("index", &event.index),
            ("host", &event.host),
        ];
        for (tag, value) in optional {
            if let Some(value) = value {
                self.text_element(tag, value)?;
            }
        }
        if event.done {
            self.writer.create_element("done").write_empty()?;
        }

        self.writer
            .write_event(XmlEvent::End(BytesEnd::new("event")))?;
        self.writer.get_mut().flush()?;
        Ok(())
    }

    /// Close the stream. Writes nothing if no event was written.
    pub fn close(&mut self) -> Result<()> {
        if self.header_written {
            self.writer
                .write_event(XmlEvent::End(BytesEnd::new("stream")))?;
            self.writer.get_mut().flush()?;
            self.header_written = false;
        }
        Ok(())
    }

    /// Unwrap the underlying writer without closing the stream.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.writer
            .create_element(tag)
            .write_text_content(BytesText::new(text))?;
        Ok(())
    }
}
