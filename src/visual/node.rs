use crate::{
    foundation::{
        color::Color,
        core::{Point, Rect, Vec2, union},
    },
    visual::Visual,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Text {
        content: String,
        font: String,
        font_size: f64,
    },
    Tex {
        source: String,
        font_size: f64,
    },
    Rectangle,
    RoundedRectangle {
        corner_radius: f64,
    },
    Group,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill_color: Color,
    pub fill_opacity: f64,
}

impl Style {
    /// Solid glyph style: filled, no outline.
    pub fn filled(color: Color) -> Self {
        Self {
            stroke_color: color,
            stroke_width: 0.0,
            stroke_opacity: 1.0,
            fill_color: color,
            fill_opacity: 1.0,
        }
    }

    /// Outline-only style used for enclosures.
    pub fn outline(color: Color, width: f64) -> Self {
        Self {
            stroke_color: color,
            stroke_width: width,
            stroke_opacity: 1.0,
            fill_color: color,
            fill_opacity: 0.0,
        }
    }
}

/// Retained visual node: a styled leaf shape or a group of nodes.
///
/// A group's frame is the union of its children and is refreshed after every
/// mutation, so `bounds()` never lags behind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub style: Style,
    frame: Rect,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    fn leaf(kind: NodeKind, width: f64, height: f64, style: Style) -> Self {
        Self {
            kind,
            style,
            frame: Rect::from_center_size(Point::ORIGIN, (width, height)),
            children: Vec::new(),
        }
    }

    pub fn text(
        content: impl Into<String>,
        font: impl Into<String>,
        font_size: f64,
        size: (f64, f64),
        color: Color,
    ) -> Self {
        Self::leaf(
            NodeKind::Text {
                content: content.into(),
                font: font.into(),
                font_size,
            },
            size.0,
            size.1,
            Style::filled(color),
        )
    }

    pub fn tex(source: impl Into<String>, font_size: f64, size: (f64, f64), color: Color) -> Self {
        Self::leaf(
            NodeKind::Tex {
                source: source.into(),
                font_size,
            },
            size.0,
            size.1,
            Style::filled(color),
        )
    }

    pub fn rectangle(width: f64, height: f64, style: Style) -> Self {
        Self::leaf(NodeKind::Rectangle, width, height, style)
    }

    pub fn rounded_rectangle(width: f64, height: f64, corner_radius: f64, style: Style) -> Self {
        Self::leaf(
            NodeKind::RoundedRectangle { corner_radius },
            width,
            height,
            style,
        )
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group)
    }

    /// Text or tex source of a leaf glyph.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content, .. } => Some(content),
            NodeKind::Tex { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Leaf: the larger of stroke and fill opacity. Group: the largest child opacity.
    pub fn opacity(&self) -> f64 {
        if self.is_group() {
            return self.children.iter().map(Node::opacity).fold(0.0, f64::max);
        }
        self.style.stroke_opacity.max(self.style.fill_opacity)
    }

    /// All leaves below (or at) this node, depth first.
    pub fn leaves(&self) -> Vec<&Node> {
        if !self.is_group() {
            return vec![self];
        }
        self.children.iter().flat_map(Node::leaves).collect()
    }

    fn each_leaf_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        if self.is_group() {
            for child in &mut self.children {
                child.each_leaf_mut(f);
            }
            self.refresh_frame();
        } else {
            f(self);
        }
    }

    fn refresh_frame(&mut self) {
        if self.is_group() {
            self.frame = union(
                self.children
                    .iter()
                    .filter(|c| !(c.is_group() && c.children.is_empty()))
                    .map(|c| c.frame),
            );
        }
    }
}

impl Visual for Node {
    fn bounds(&self) -> Rect {
        self.frame
    }

    fn shift(&mut self, by: Vec2) {
        self.each_leaf_mut(&mut |leaf| leaf.frame = leaf.frame + by);
    }

    fn scale_about(&mut self, factor: f64, about: Point) {
        self.each_leaf_mut(&mut |leaf| {
            let p0 = about + (Point::new(leaf.frame.x0, leaf.frame.y0) - about) * factor;
            let p1 = about + (Point::new(leaf.frame.x1, leaf.frame.y1) - about) * factor;
            leaf.frame = Rect::from_points(p0, p1);
            match &mut leaf.kind {
                NodeKind::Text { font_size, .. } | NodeKind::Tex { font_size, .. } => {
                    *font_size *= factor.abs();
                }
                NodeKind::RoundedRectangle { corner_radius } => *corner_radius *= factor.abs(),
                NodeKind::Rectangle | NodeKind::Group => {}
            }
        });
    }

    fn set_color(&mut self, color: Color) {
        self.each_leaf_mut(&mut |leaf| {
            leaf.style.stroke_color = color;
            leaf.style.fill_color = color;
        });
    }

    fn set_stroke(&mut self, color: Color, width: Option<f64>) {
        self.each_leaf_mut(&mut |leaf| {
            leaf.style.stroke_color = color;
            if let Some(w) = width {
                leaf.style.stroke_width = w.max(0.0);
            }
        });
    }

    fn set_opacity(&mut self, opacity: f64) {
        let o = opacity.clamp(0.0, 1.0);
        self.each_leaf_mut(&mut |leaf| {
            leaf.style.stroke_opacity = o;
            leaf.style.fill_opacity = o;
        });
    }

    fn set_fill_opacity(&mut self, opacity: f64) {
        let o = opacity.clamp(0.0, 1.0);
        self.each_leaf_mut(&mut |leaf| leaf.style.fill_opacity = o);
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn group(children: Vec<Self>) -> Self {
        let mut g = Self {
            kind: NodeKind::Group,
            style: Style::filled(Color::WHITE),
            frame: Rect::ZERO,
            children,
        };
        g.refresh_frame();
        g
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/node.rs"]
mod tests;
