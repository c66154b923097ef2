//! Glyph outlines from the `glyf` table

use super::dom::{format_number, Element, Node};
use crate::{class::GlyphClass, error::TtxError};

/// A bounding box.
///
/// Unlike the compiled table these are real numbers, since the rewriter
/// scales outlines without rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bbox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// A point on a contour.
///
/// Attributes other than the coordinates and the on-curve flag are kept
/// as-is, as are the flag bits above the on-curve bit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub on_curve: bool,
    pub extra: Vec<(String, String)>,
    // the `on` attribute as read, if there was one
    flags: Option<u32>,
}

/// A single closed contour
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour(Vec<Point>);

/// A `TTGlyph` record.
///
/// Children other than contours (instructions, components) pass through
/// untouched, after the contours.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRecord {
    name: String,
    class: GlyphClass,
    pub bbox: Option<Bbox>,
    pub contours: Vec<Contour>,
    pub other: Vec<Node>,
}

impl Bbox {
    /// The midpoint of the box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_max + self.x_min) / 2.0,
            (self.y_max + self.y_min) / 2.0,
        )
    }
}

impl Contour {
    /// The total number of points in this contour
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if this contour is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.0.iter_mut()
    }

    fn from_element(el: &Element) -> Result<Self, TtxError> {
        el.elements_named("pt")
            .map(Point::from_element)
            .collect::<Result<Vec<_>, _>>()
            .map(Contour)
    }

    fn to_element(&self) -> Element {
        let mut el = Element::new("contour");
        el.children = self
            .iter()
            .map(|point| Node::Element(point.to_element()))
            .collect();
        el
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl Point {
    pub fn new(x: f64, y: f64, on_curve: bool) -> Self {
        Point {
            x,
            y,
            on_curve,
            extra: Vec::new(),
            flags: None,
        }
    }

    fn from_element(el: &Element) -> Result<Self, TtxError> {
        let flags = match el.attr("on") {
            Some(_) => Some(el.number_attr("on")? as u32),
            None => None,
        };
        Ok(Point {
            x: el.number_attr("x")?,
            y: el.number_attr("y")?,
            on_curve: flags.is_some_and(|flags| flags & 1 == 1),
            flags,
            extra: el
                .attributes
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "x" | "y" | "on"))
                .cloned()
                .collect(),
        })
    }

    fn to_element(&self) -> Element {
        let mut el = Element::new("pt")
            .with_attr("x", format_number(self.x))
            .with_attr("y", format_number(self.y));
        // a missing `on` means off-curve
        let flags = match self.flags {
            Some(flags) => Some(flags & !1 | u32::from(self.on_curve)),
            None => self.on_curve.then_some(1),
        };
        if let Some(flags) = flags {
            el = el.with_attr("on", flags.to_string());
        }
        el.attributes.extend(self.extra.iter().cloned());
        el
    }
}

impl GlyphRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        GlyphRecord {
            class: GlyphClass::of(&name),
            name,
            bbox: None,
            contours: Vec::new(),
            other: Vec::new(),
        }
    }

    pub fn with_bbox(mut self, bbox: Bbox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_contour(mut self, contour: impl Into<Contour>) -> Self {
        self.contours.push(contour.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> GlyphClass {
        self.class
    }

    /// Change the name, reclassifying the glyph.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.class = GlyphClass::of(&self.name);
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.contours.iter().flat_map(Contour::iter)
    }

    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.contours.iter_mut().flat_map(Contour::iter_mut)
    }

    /// Parse a `TTGlyph` element.
    pub fn from_element(el: &Element) -> Result<Self, TtxError> {
        let mut record = GlyphRecord::new(el.required_attr("name")?);
        // empty glyphs are written without a bounding box
        if el.attr("xMin").is_some() {
            record.bbox = Some(Bbox {
                x_min: el.number_attr("xMin")?,
                y_min: el.number_attr("yMin")?,
                x_max: el.number_attr("xMax")?,
                y_max: el.number_attr("yMax")?,
            });
        }
        for child in &el.children {
            match child {
                Node::Element(contour) if contour.name == "contour" => {
                    record.contours.push(Contour::from_element(contour)?)
                }
                other => record.other.push(other.clone()),
            }
        }
        Ok(record)
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("TTGlyph").with_attr("name", self.name.as_str());
        if let Some(bbox) = &self.bbox {
            el = el
                .with_attr("xMin", format_number(bbox.x_min))
                .with_attr("yMin", format_number(bbox.y_min))
                .with_attr("xMax", format_number(bbox.x_max))
                .with_attr("yMax", format_number(bbox.y_max));
        }
        el.children = self
            .contours
            .iter()
            .map(|contour| Node::Element(contour.to_element()))
            .chain(self.other.iter().cloned())
            .collect();
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GLYPH: &str = r#"<TTGlyph name="SWA" xMin="0" yMin="-10" xMax="100" yMax="90">
  <contour>
    <pt x="0" y="-10" on="1" overlap="1"/>
    <pt x="50" y="90" on="0"/>
    <pt x="100" y="-10" on="1"/>
  </contour>
  <instructions/>
</TTGlyph>"#;

    #[test]
    fn parse_glyph() {
        let el = Element::parse(GLYPH).unwrap();
        let glyph = GlyphRecord::from_element(&el).unwrap();
        assert_eq!(glyph.name(), "SWA");
        assert_eq!(glyph.class(), GlyphClass::Extension);
        assert_eq!(
            glyph.bbox,
            Some(Bbox {
                x_min: 0.0,
                y_min: -10.0,
                x_max: 100.0,
                y_max: 90.0
            })
        );
        assert_eq!(glyph.contours.len(), 1);
        assert_eq!(glyph.contours[0].len(), 3);
        let first = glyph.points().next().unwrap();
        assert!(first.on_curve);
        assert_eq!(first.extra, vec![("overlap".to_string(), "1".to_string())]);
        assert!(!glyph.points().nth(1).unwrap().on_curve);
        assert!(glyph.other[0].is_element("instructions"));
    }

    #[test]
    fn untouched_glyph_writes_back_unchanged() {
        let el = Element::parse(GLYPH).unwrap();
        let glyph = GlyphRecord::from_element(&el).unwrap();
        assert_eq!(glyph.to_element(), el);
    }

    #[test]
    fn point_flags_are_kept() {
        let el = Element::parse(
            r#"<TTGlyph name="A" xMin="0" yMin="0" xMax="1" yMax="1">
  <contour>
    <pt x="0" y="0"/>
    <pt x="1" y="1" on="3"/>
  </contour>
</TTGlyph>"#,
        )
        .unwrap();
        let mut glyph = GlyphRecord::from_element(&el).unwrap();
        let on_curve: Vec<_> = glyph.points().map(|p| p.on_curve).collect();
        assert_eq!(on_curve, [false, true]);
        assert_eq!(glyph.to_element(), el);

        for point in glyph.points_mut() {
            point.on_curve = !point.on_curve;
        }
        let written = glyph.to_element();
        let flags: Vec<_> = written
            .elements_named("contour")
            .flat_map(|contour| contour.elements_named("pt"))
            .map(|pt| pt.attr("on"))
            .collect();
        assert_eq!(flags, [Some("1"), Some("2")]);
    }

    #[test]
    fn empty_glyph_has_no_bbox() {
        let el = Element::parse(r#"<TTGlyph name=".null"/>"#).unwrap();
        let glyph = GlyphRecord::from_element(&el).unwrap();
        assert_eq!(glyph.bbox, None);
        assert!(glyph.contours.is_empty());
        assert_eq!(glyph.to_element(), el);
    }

    #[test]
    fn rename_reclassifies() {
        let mut glyph = GlyphRecord::new("SW 250");
        assert_eq!(glyph.class(), GlyphClass::Extension);
        glyph.rename("SW250");
        assert_eq!(glyph.class(), GlyphClass::Numeral);
    }

    #[test]
    fn center() {
        let bbox = Bbox {
            x_min: 10.0,
            y_min: -20.0,
            x_max: 110.0,
            y_max: 20.0,
        };
        assert_eq!(bbox.center(), (60.0, 0.0));
    }
}
