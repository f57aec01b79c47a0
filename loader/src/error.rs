use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML decode error: {0}")]
    Decode(#[from] quick_xml::DeError),
}
