use config::{AttributeName, Bars};

use crate::{Error, Height};

/// A document whose bar elements can be queried and styled.
pub trait Document {
    /// A handle to an element of the document.
    type Element;

    /// Returns all elements carrying the bar class and the height attribute, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be queried.
    fn select_bars(&self, bars: &Bars) -> Result<Vec<Self::Element>, Error>;

    /// Returns the value of the given attribute, if present.
    fn attribute(&self, element: &Self::Element, name: &AttributeName) -> Option<String>;

    /// Writes the given height to the inline style of the element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no inline style or the style could not be written.
    fn set_height(&mut self, element: &Self::Element, height: Height) -> Result<(), Error>;
}
