//! SVG export serializer.
//!
//! Overlays a learner's strokes on the guide they traced, using the
//! [`svg`] crate for document construction, XML escaping, and path data
//! formatting.
//!
//! The guide is drawn as a dashed path under a `<g id="guide">` group
//! with a start marker at its first waypoint. Each stroke becomes its own
//! `<path>` under `<g id="strokes">`, in drawing order.
//!
//! Optional [`SvgMetadata`] embeds `<title>` and `<desc>` elements, and
//! the scoring configuration as machine-readable `<metadata>`.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Description, Element, Group, Path, Title};
use svg::node::{Node, Text, Value};

use tracewise_scoring::{Dimensions, Guide, Point, Stroke};

/// Guide line color.
const GUIDE_COLOR: &str = "#B0BEC5";
/// Learner stroke color.
const STROKE_COLOR: &str = "#4A90D9";
/// Start marker color.
const START_COLOR: &str = "#4CAF50";
/// Guide and stroke line width in canvas units.
const LINE_WIDTH: f64 = 8.0;
/// Dash pattern for the guide.
const GUIDE_DASH: &str = "10 10";
/// Start marker radius in canvas units.
const START_RADIUS: f64 = 8.0;

/// Metadata to embed in the SVG document.
///
/// All fields are optional. Text values are XML-escaped automatically by
/// the `svg` crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    ///
    /// Typically the exercise name.
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    ///
    /// Typically the score and its breakdown.
    pub description: Option<&'a str>,

    /// Serialized [`ScoringConfig`](tracewise_scoring::ScoringConfig),
    /// emitted inside `<metadata>` wrapped in a namespaced
    /// `<tracewise:scoring>` element.
    pub config_json: Option<&'a str>,
}

/// Build an SVG path `d` attribute string from a run of points.
///
/// Uses `M` for the first point and `L` for subsequent points.
/// Returns an empty string for fewer than 2 points.
///
/// # Examples
///
/// ```
/// use tracewise_scoring::Point;
/// use tracewise_export::build_path_data;
///
/// let d = build_path_data(&[Point::new(10.0, 20.0), Point::new(30.0, 40.0)]);
/// assert_eq!(d, "M10,20 L30,40");
/// ```
#[must_use]
pub fn build_path_data(points: &[Point]) -> String {
    let [first, rest @ ..] = points else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }

    let mut data = Data::new().move_to((first.x, first.y));
    for p in rest {
        data = data.line_to((p.x, p.y));
    }
    String::from(Value::from(data))
}

fn line(d: String, color: &str) -> Path {
    Path::new()
        .set("d", d)
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", LINE_WIDTH)
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
}

/// Serialize a guide and the strokes drawn over it into an SVG string.
///
/// The `viewBox` matches `dimensions` so canvas coordinates are used
/// unchanged. Strokes with fewer than 2 points are skipped. An empty
/// group is omitted entirely.
#[must_use]
pub fn to_svg(
    guide: &Guide,
    strokes: &[Stroke],
    dimensions: Dimensions,
    metadata: &SvgMetadata<'_>,
) -> String {
    let w = dimensions.width;
    let h = dimensions.height;
    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h));

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    if let Some(config_json) = metadata.config_json {
        let mut scoring_el = Element::new("tracewise:scoring");
        scoring_el.assign("xmlns:tracewise", "urn:tracewise:scoring:1");
        scoring_el.append(Text::new(config_json));
        let mut metadata_el = Element::new("metadata");
        metadata_el.append(scoring_el);
        doc = doc.add(metadata_el);
    }

    let guide_d = build_path_data(guide.waypoints());
    if !guide_d.is_empty() {
        let mut group = Group::new()
            .set("id", "guide")
            .add(line(guide_d, GUIDE_COLOR).set("stroke-dasharray", GUIDE_DASH));
        if let Some(start) = guide.waypoints().first() {
            group = group.add(
                Circle::new()
                    .set("cx", start.x)
                    .set("cy", start.y)
                    .set("r", START_RADIUS)
                    .set("fill", START_COLOR),
            );
        }
        doc = doc.add(group);
    }

    let paths: Vec<String> = strokes
        .iter()
        .map(|stroke| build_path_data(stroke.points()))
        .filter(|d| !d.is_empty())
        .collect();
    if !paths.is_empty() {
        let mut group = Group::new().set("id", "strokes");
        for d in paths {
            group = group.add(line(d, STROKE_COLOR));
        }
        doc = doc.add(group);
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}
