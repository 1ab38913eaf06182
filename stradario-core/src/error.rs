use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("malformed XML attribute: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),
    #[error("malformed {element} record: missing `{attribute}` attribute")]
    MalformedRecord {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
