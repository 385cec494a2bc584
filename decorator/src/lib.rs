//! The `decorator` crate sets the height of chart bars from their data attributes.

mod document;
mod height;
mod log;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use config::Bars;

pub use document::Document;
pub use height::Height;

use crate::log::{error, info};

/// Sets the inline height of every bar in the document from its height attribute.
///
/// Attribute values which cannot be parsed result in a height of zero. Returns the number of
/// decorated bars.
///
/// # Errors
///
/// Returns an error if the document could not be queried or a style could not be written.
/// Bars decorated before the failure keep their new height.
pub fn decorate<D: Document>(document: &mut D, bars: &Bars) -> Result<usize, Error> {
    let elements = document.select_bars(bars)?;

    for element in &elements {
        let height = document
            .attribute(element, &bars.attribute)
            .map_or_else(Height::default, |value| Height::parse(&value));

        document.set_height(element, height)?;
    }

    Ok(elements.len())
}

/// Decorates the bars of the document, handing any failure to `report` instead of returning it.
pub fn decorate_or_report<D: Document>(
    document: &mut D,
    bars: &Bars,
    report: impl FnOnce(&Error),
) {
    match decorate(document, bars) {
        Ok(count) => {
            info!("Decorated {count} bars");
        }
        Err(error) => report(&error),
    }
}

/// Logs a failed decoration to the diagnostic channel.
pub fn log_failure(error: &Error) {
    error!("Failed to decorate bars: {error}");
}

/// The error type for errors occurring while decorating a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document is available.
    #[error("no document available")]
    MissingDocument,
    /// Querying the document failed.
    #[error("failed to query document: {0}")]
    Query(String),
    /// Registering an event listener failed.
    #[error("failed to register event listener: {0}")]
    Listener(String),
    /// Element has no inline style.
    #[error("element has no inline style")]
    NotStyleable,
    /// Writing a style failed.
    #[error("failed to write style: {0}")]
    Style(String),
    /// Configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::Error),
}
