//! Streaming scanner for wagon section data.
//!
//! Data files list trains, the position of each wagon and the platform
//! sections a wagon stops at:
//!
//! ```xml
//! <train>
//!   <trainNumber>456</trainNumber>
//!   <waggon>
//!     <position>7</position>
//!     <sections>
//!       <identifier>X1</identifier>
//!       <identifier>X2</identifier>
//!     </sections>
//!   </waggon>
//! </train>
//! ```
//!
//! Files can be large, so they are read as a forward-only event stream and
//! never held in memory as a tree. Only the most recently seen train number
//! and position are remembered; when a `sections` group opens, those decide
//! whether its identifiers are collected. Scanning stops at the end of the
//! first matching group, so a repeated record for the same train and wagon
//! later in the file is never read. Input that ends before the document is
//! complete is an error, so a truncated file is never mistaken for one
//! without a record.
//!
//! Element names are matched case-insensitively and without namespace
//! prefixes. DOCTYPE declarations are skipped without being interpreted, so
//! no external entity or DTD is ever loaded; only the predefined XML
//! entities and character references are expanded.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::domain::{TrainNumber, WagonNumber};

pub use error::ScanError;

/// Elements the scanner reacts to. Everything else is walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    TrainNumber,
    Position,
    Sections,
    Identifier,
}

impl Element {
    fn classify(local_name: &[u8]) -> Option<Self> {
        [
            Element::TrainNumber,
            Element::Position,
            Element::Sections,
            Element::Identifier,
        ]
        .into_iter()
        .find(|e| e.name().as_bytes().eq_ignore_ascii_case(local_name))
    }

    fn name(self) -> &'static str {
        match self {
            Element::TrainNumber => "trainNumber",
            Element::Position => "position",
            Element::Sections => "sections",
            Element::Identifier => "identifier",
        }
    }
}

/// Whether the scanner is inside the sections group it is looking for.
#[derive(Debug, PartialEq, Eq)]
enum ScanState {
    Seeking,
    Matching(Vec<String>),
}

/// Text being collected for a scalar field.
#[derive(Debug)]
struct Capture {
    element: Element,
    text: String,
}

/// Scan state for a single document.
#[derive(Debug)]
struct Cursor {
    target_train: String,
    target_wagon: String,
    train: Option<String>,
    position: Option<String>,
    capture: Option<Capture>,
    state: ScanState,
    /// Elements currently open.
    depth: usize,
    seen_root: bool,
}

impl Cursor {
    fn new(train: TrainNumber, wagon: WagonNumber) -> Self {
        Self {
            target_train: train.to_string(),
            target_wagon: wagon.to_string(),
            train: None,
            position: None,
            capture: None,
            state: ScanState::Seeking,
            depth: 0,
            seen_root: false,
        }
    }

    fn is_target(&self) -> bool {
        self.train.as_deref() == Some(self.target_train.as_str())
            && self.position.as_deref() == Some(self.target_wagon.as_str())
    }

    fn start(&mut self, local_name: &[u8]) -> Result<(), ScanError> {
        if let Some(capture) = &self.capture {
            return Err(ScanError::NestedElement {
                element: capture.element.name().to_string(),
            });
        }
        self.depth += 1;
        self.seen_root = true;

        match Element::classify(local_name) {
            Some(element @ (Element::TrainNumber | Element::Position)) => {
                self.begin_capture(element);
            }
            Some(Element::Identifier) => {
                if matches!(self.state, ScanState::Matching(_)) {
                    self.begin_capture(Element::Identifier);
                }
            }
            Some(Element::Sections) => {
                if self.state == ScanState::Seeking && self.is_target() {
                    self.state = ScanState::Matching(Vec::new());
                }
            }
            None => {}
        }
        Ok(())
    }

    fn begin_capture(&mut self, element: Element) {
        self.capture = Some(Capture {
            element,
            text: String::new(),
        });
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = &mut self.capture {
            capture.text.push_str(text);
        }
    }

    /// Handle an end tag. Returns the collected sections once the matching
    /// group closes.
    fn end(&mut self, local_name: &[u8]) -> Option<Vec<String>> {
        self.depth = self.depth.saturating_sub(1);

        // Captured fields hold no child elements, so this closes the field.
        if let Some(capture) = self.capture.take() {
            let text = capture.text.trim().to_string();
            match capture.element {
                Element::TrainNumber => self.train = Some(text),
                Element::Position => self.position = Some(text),
                Element::Identifier => {
                    if let ScanState::Matching(sections) = &mut self.state {
                        sections.push(text);
                    }
                }
                Element::Sections => {}
            }
            return None;
        }

        if Element::classify(local_name) == Some(Element::Sections)
            && let ScanState::Matching(sections) = &mut self.state
        {
            return Some(std::mem::take(sections));
        }
        None
    }

    /// Result at end of input. A document without a root element, or one
    /// cut off with elements still open, is not a valid scan.
    fn finish(self) -> Result<Vec<String>, ScanError> {
        if !self.seen_root || self.depth > 0 {
            return Err(ScanError::UnexpectedEof {
                open_elements: self.depth,
            });
        }
        // A closed document never ends while a matching group is open.
        Ok(Vec::new())
    }
}

/// Scan an XML document for the sections of one wagon.
///
/// Returns the identifiers of the first sections group whose preceding
/// train number and position equal `train` and `wagon`, in document order,
/// or an empty list if the document has no such record.
pub fn scan_sections<R: BufRead>(
    input: R,
    train: TrainNumber,
    wagon: WagonNumber,
) -> Result<Vec<String>, ScanError> {
    let mut reader = Reader::from_reader(input);
    let config = reader.config_mut();
    config.trim_text(true);
    config.expand_empty_elements = true;

    let mut cursor = Cursor::new(train, wagon);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => cursor.start(e.local_name().as_ref())?,
            Event::End(e) => {
                if let Some(sections) = cursor.end(e.local_name().as_ref()) {
                    return Ok(sections);
                }
            }
            Event::Text(e) => cursor.text(&e.unescape()?),
            Event::CData(e) => cursor.text(std::str::from_utf8(&e)?),
            Event::Eof => return cursor.finish(),
            _ => {}
        }
        buf.clear();
    }
}

/// Open `path` and scan it with [`scan_sections`].
///
/// The file is closed before this returns, whatever the outcome.
pub fn scan_file(
    path: &Path,
    train: TrainNumber,
    wagon: WagonNumber,
) -> Result<Vec<String>, ScanError> {
    let file = File::open(path)?;
    scan_sections(BufReader::new(file), train, wagon)
}
