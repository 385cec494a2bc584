//! An in-memory document, used for running the decorator outside of a browser.

use std::collections::BTreeMap;

use config::{AttributeName, Bars};

use crate::{Document, Error, Height};

/// An element of a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    height: Option<String>,
}

impl MemoryElement {
    /// Creates an element without classes, attributes or style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given class to the element.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Sets the given attribute of the element.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Sets the inline height style of the element.
    #[must_use]
    pub fn with_height(mut self, height: &str) -> Self {
        self.height = Some(height.to_owned());
        self
    }

    /// Returns the inline height style of the element.
    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    /// Sets the given attribute of the element, replacing any previous value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn matches(&self, bars: &Bars) -> bool {
        self.classes
            .iter()
            .any(|class| class == bars.class.as_str())
            && self.attributes.contains_key(bars.attribute.as_str())
    }
}

/// A flat in-memory document of elements.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
    remaining_writes: Option<usize>,
    fail_queries: bool,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the document, returning its index.
    pub fn push(&mut self, element: MemoryElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Returns the element at the given index.
    pub fn element(&self, index: usize) -> Option<&MemoryElement> {
        self.elements.get(index)
    }

    /// Returns the element at the given index mutably.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut MemoryElement> {
        self.elements.get_mut(index)
    }

    /// Makes every style write after the given number of successful writes fail.
    pub fn fail_after_writes(&mut self, writes: usize) {
        self.remaining_writes = Some(writes);
    }

    /// Makes every query for bars fail.
    pub fn fail_queries(&mut self) {
        self.fail_queries = true;
    }
}

impl Document for MemoryDocument {
    type Element = usize;

    fn select_bars(&self, bars: &Bars) -> Result<Vec<usize>, Error> {
        if self.fail_queries {
            return Err(Error::Query(format!("`{}` is not queryable", bars.selector())));
        }

        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.matches(bars))
            .map(|(index, _)| index)
            .collect())
    }

    fn attribute(&self, element: &usize, name: &AttributeName) -> Option<String> {
        self.elements
            .get(*element)
            .and_then(|element| element.attributes.get(name.as_str()))
            .cloned()
    }

    fn set_height(&mut self, element: &usize, height: Height) -> Result<(), Error> {
        if let Some(remaining_writes) = &mut self.remaining_writes {
            if *remaining_writes == 0 {
                return Err(Error::Style(format!("writing to element {element} failed")));
            }
            *remaining_writes -= 1;
        }

        let element = self.elements.get_mut(*element).ok_or(Error::NotStyleable)?;
        element.height = Some(height.to_string());

        Ok(())
    }
}
