//! Element factory: builds typed elements from the active tool.

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::shapes::{ArrowDirection, Element, ElementId, SerializableColor, Shape};
use crate::tools::Tool;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A partial element record. Every present field overrides the target.
///
/// Fields that do not exist on the target's variant are ignored, so a patch
/// can never change what kind of element it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPatch {
    /// Only honored at creation; ids are never reassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ElementId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_direction: Option<ArrowDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ElementPatch {
    /// Create an empty patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `id` for the created element instead of a generated one.
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the stroke color.
    pub fn stroke_color(mut self, color: SerializableColor) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Set the stroke width.
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Set the element's selection flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = Some(selected);
        self
    }

    /// Replace the points of a freehand path.
    pub fn points(mut self, points: Vec<Point>) -> Self {
        self.points = Some(points);
        self
    }

    /// Set both endpoints of a two-point shape.
    pub fn span(mut self, start: Point, end: Point) -> Self {
        self.start_point = Some(start);
        self.end_point = Some(end);
        self
    }

    /// Set the fill of a square or circle.
    pub fn fill_color(mut self, color: SerializableColor) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Choose which ends of an arrow carry a head.
    pub fn arrow_direction(mut self, direction: ArrowDirection) -> Self {
        self.arrow_direction = Some(direction);
        self
    }

    /// Place a text label at `origin` with `content`.
    pub fn text(mut self, origin: Point, content: impl Into<String>) -> Self {
        self.origin = Some(origin);
        self.content = Some(content.into());
        self
    }

    /// Replace the content of a text label.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the font size of a text label.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

impl Element {
    /// Shallow-merge `patch` into this element. The id is left untouched.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(color) = patch.stroke_color {
            self.stroke_color = color;
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width;
        }
        if let Some(selected) = patch.is_selected {
            self.is_selected = selected;
        }

        match &mut self.shape {
            Shape::Draw(path) => {
                if let Some(points) = &patch.points {
                    path.points = points.clone();
                }
            }
            Shape::Square(rect) => {
                set(&mut rect.start_point, patch.start_point);
                set(&mut rect.end_point, patch.end_point);
                if patch.fill_color.is_some() {
                    rect.fill_color = patch.fill_color;
                }
            }
            Shape::Circle(ellipse) => {
                set(&mut ellipse.start_point, patch.start_point);
                set(&mut ellipse.end_point, patch.end_point);
                if patch.fill_color.is_some() {
                    ellipse.fill_color = patch.fill_color;
                }
            }
            Shape::Line(line) => {
                set(&mut line.start_point, patch.start_point);
                set(&mut line.end_point, patch.end_point);
            }
            Shape::Arrow(arrow) => {
                set(&mut arrow.start_point, patch.start_point);
                set(&mut arrow.end_point, patch.end_point);
                set(&mut arrow.arrow_direction, patch.arrow_direction);
            }
            Shape::Text(text) => {
                set(&mut text.origin, patch.origin);
                set(&mut text.font_size, patch.font_size);
                if let Some(content) = &patch.content {
                    text.content = content.clone();
                }
            }
        }
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Build an element for `tool` with the default stroke (black, width 1).
pub fn create_element(tool: Tool, patch: &ElementPatch) -> BoardResult<Element> {
    create_element_with(&BoardConfig::default(), tool, patch)
}

/// Build an element for `tool`, taking defaults from `config`.
///
/// Fails with [`BoardError::UnsupportedTool`] for tools that do not create
/// elements. Geometry is taken as given.
pub fn create_element_with(
    config: &BoardConfig,
    tool: Tool,
    patch: &ElementPatch,
) -> BoardResult<Element> {
    let Some(kind) = tool.shape_kind() else {
        log::warn!("Cannot create an element with the {} tool", tool);
        return Err(BoardError::UnsupportedTool(tool));
    };

    let mut element = Element {
        id: patch.id.clone().unwrap_or_else(ElementId::generate),
        stroke_color: config.stroke_color,
        stroke_width: config.stroke_width,
        is_selected: false,
        shape: Shape::empty(kind),
    };
    element.apply_patch(patch);
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_defaults_for_every_shape_tool() {
        for tool in Tool::ALL.into_iter().filter(|t| t.creates_shape()) {
            let element = create_element(tool, &ElementPatch::new()).unwrap();
            assert_eq!(Some(element.kind()), tool.shape_kind());
            assert_eq!(element.stroke_color, SerializableColor::black());
            assert!((element.stroke_width - 1.0).abs() < f64::EPSILON);
            assert!(!element.is_selected);
        }
    }

    #[test]
    fn test_unsupported_tools() {
        for tool in [Tool::Hand, Tool::Select, Tool::Eraser] {
            assert_eq!(
                create_element(tool, &ElementPatch::new()),
                Err(BoardError::UnsupportedTool(tool))
            );
        }
    }

    #[test]
    fn test_patch_overrides_defaults() {
        let red = SerializableColor::new(255, 0, 0, 255);
        let patch = ElementPatch::new()
            .id("a")
            .stroke_color(red)
            .stroke_width(4.0)
            .selected(true)
            .span(Point::new(1.0, 2.0), Point::new(3.0, 4.0))
            .fill_color(SerializableColor::white());

        let element = create_element(Tool::Square, &patch).unwrap();
        assert_eq!(element.id(), &ElementId::from("a"));
        assert_eq!(element.stroke_color, red);
        assert!((element.stroke_width - 4.0).abs() < f64::EPSILON);
        assert!(element.is_selected);
        match element.shape() {
            Shape::Square(rect) => {
                assert_eq!(rect.start_point, Point::new(1.0, 2.0));
                assert_eq!(rect.end_point, Point::new(3.0, 4.0));
                assert_eq!(rect.fill_color, Some(SerializableColor::white()));
            }
            other => panic!("expected a square, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_foreign_fields_are_ignored() {
        let patch = ElementPatch::new()
            .points(vec![Point::new(1.0, 1.0)])
            .arrow_direction(ArrowDirection::Both);

        let line = create_element(Tool::Line, &patch).unwrap();
        assert_eq!(line.kind(), ShapeKind::Line);
        assert_eq!(line.shape(), &Shape::empty(ShapeKind::Line));

        let arrow = create_element(Tool::Arrow, &patch).unwrap();
        match arrow.shape() {
            Shape::Arrow(a) => assert_eq!(a.arrow_direction, ArrowDirection::Both),
            other => panic!("expected an arrow, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_fresh_ids() {
        let a = create_element(Tool::Draw, &ElementPatch::new()).unwrap();
        let b = create_element(Tool::Draw, &ElementPatch::new()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_config_defaults() {
        let config = BoardConfig::default().with_stroke(SerializableColor::white(), 3.0);
        let element = create_element_with(&config, Tool::Text, &ElementPatch::new()).unwrap();
        assert_eq!(element.stroke_color, SerializableColor::white());
        assert!((element.stroke_width - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_patch_keeps_id_and_other_fields() {
        let mut element = create_element(
            Tool::Text,
            &ElementPatch::new().id("t").text(Point::new(5.0, 5.0), "hello"),
        )
        .unwrap();

        element.apply_patch(&ElementPatch::new().id("other").content("bye"));

        assert_eq!(element.id(), &ElementId::from("t"));
        match element.shape() {
            Shape::Text(text) => {
                assert_eq!(text.content, "bye");
                assert_eq!(text.origin, Point::new(5.0, 5.0));
            }
            other => panic!("expected text, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_patch_from_json() {
        let patch: ElementPatch = serde_json::from_str(
            r##"{ "strokeColor": "#00ff00", "startPoint": { "x": 1.0, "y": 2.0 }, "arrowDirection": "both" }"##,
        )
        .unwrap();

        assert_eq!(patch.stroke_color, Some(SerializableColor::new(0, 255, 0, 255)));
        assert_eq!(patch.start_point, Some(Point::new(1.0, 2.0)));
        assert_eq!(patch.arrow_direction, Some(ArrowDirection::Both));
        assert_eq!(patch.end_point, None);
    }
}
