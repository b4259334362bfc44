//! Record document loading.
//!
//! Records are read from XML, JSON or YAML documents. The format is picked
//! from the file extension. When no path is given the sample record bundled
//! with the binary is used.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::{DiagnosticsError, Result};

use super::vehicle::VehicleRecord;

/// Name reported for the bundled sample record.
pub const SAMPLE_RECORD_NAME: &str = "SampleCar.xml";

const SAMPLE_RECORD: &str = include_str!("../../resources/SampleCar.xml");

/// Root element of an XML record document.
const XML_ROOT: &str = "car";

/// Encoding of a record document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Xml,
    Json,
    Yaml,
}

impl RecordFormat {
    /// Pick the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xml") => Ok(Self::Xml),
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            _ => Err(DiagnosticsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Where a record comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordSource {
    /// The sample record compiled into the binary.
    #[default]
    Embedded,
    /// A record document on disk.
    File(PathBuf),
}

impl RecordSource {
    /// Use `path` when given, the embedded sample otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or_default()
    }

    /// Name used in messages.
    pub fn name(&self) -> String {
        match self {
            Self::Embedded => SAMPLE_RECORD_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Load a record from its source.
pub fn load_record(source: &RecordSource) -> Result<VehicleRecord> {
    match source {
        RecordSource::Embedded => {
            parse_record(SAMPLE_RECORD, RecordFormat::Xml, SAMPLE_RECORD_NAME)
        }
        RecordSource::File(path) => load_record_file(path),
    }
}

/// Load a single record document from disk.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if the extension is not recognized.
/// Returns `RecordNotFound` if the file doesn't exist.
/// Returns `RecordParseError` if the document cannot be decoded.
pub fn load_record_file(path: &Path) -> Result<VehicleRecord> {
    let format = RecordFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DiagnosticsError::RecordNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DiagnosticsError::Io(e)
        }
    })?;

    parse_record(&content, format, &path.display().to_string())
}

/// Decode record content.
///
/// # Arguments
///
/// * `content` - The document text
/// * `format` - How the document is encoded
/// * `source_name` - Name for error reporting
pub fn parse_record(
    content: &str,
    format: RecordFormat,
    source_name: &str,
) -> Result<VehicleRecord> {
    debug!("Parsing {:?} record from {}", format, source_name);

    let parse_error = |message: String| DiagnosticsError::RecordParseError {
        source_name: source_name.to_string(),
        message,
    };

    let record: VehicleRecord = match format {
        RecordFormat::Xml => {
            check_xml_root(content).map_err(parse_error)?;
            quick_xml::de::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    debug!("Loaded record with {} part(s)", record.parts.len());
    Ok(record)
}

/// Require the document element of an XML record to be `<car>`.
fn check_xml_root(content: &str) -> std::result::Result<(), String> {
    let mut reader = Reader::from_str(content);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == XML_ROOT {
                    return Ok(());
                }
                return Err(format!("expected root element <{XML_ROOT}>, found <{name}>"));
            }
            Ok(Event::Eof) => return Err("document has no root element".to_string()),
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
}
