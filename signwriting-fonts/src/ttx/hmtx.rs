//! Horizontal metrics from the `hmtx` table

use super::dom::{format_number, Element};
use crate::{class::GlyphClass, error::TtxError};

/// An `mtx` record
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: String,
    class: GlyphClass,
    pub width: f64,
    pub lsb: f64,
}

impl Metric {
    pub fn new(name: impl Into<String>, width: f64, lsb: f64) -> Self {
        let name = name.into();
        Metric {
            class: GlyphClass::of(&name),
            name,
            width,
            lsb,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> GlyphClass {
        self.class
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.class = GlyphClass::of(&self.name);
    }

    pub(crate) fn from_element(el: &Element) -> Result<Self, TtxError> {
        Ok(Metric::new(
            el.required_attr("name")?,
            el.number_attr("width")?,
            el.number_attr("lsb")?,
        ))
    }

    pub(crate) fn to_element(&self) -> Element {
        Element::new("mtx")
            .with_attr("name", self.name.as_str())
            .with_attr("width", format_number(self.width))
            .with_attr("lsb", format_number(self.lsb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_element() {
        let el = Element::new("mtx")
            .with_attr("name", "SWM")
            .with_attr("width", "0")
            .with_attr("lsb", "-12");
        let metric = Metric::from_element(&el).unwrap();
        assert_eq!(metric.class(), GlyphClass::Box);
        assert_eq!(metric.width, 0.0);
        assert_eq!(metric.lsb, -12.0);
        assert_eq!(metric.to_element(), el);
    }
}
