use crate::{
    foundation::{color::Color, error::ExprResult},
    grid::{
        matrix::{Decomposition, Grid},
        wrapped::{Enclosures, WrappedGrid},
    },
    library::config::{Defaults, GlyphStyle, GridStyle},
    visual::{
        Visual,
        node::{Node, Style},
    },
};

/// Builds the visuals an expression is made of.
///
/// Implement this to plug in another visual runtime. Only `grid`,
/// `enclosure`, `verb` and `equals` are required.
pub trait VisualFactory {
    type Visual: Visual;

    fn defaults(&self) -> &Defaults;

    /// Entry grid from row-major labels, laid out per `style`.
    fn grid(&self, rows: &[Vec<String>], style: &GridStyle) -> ExprResult<Grid<Self::Visual>>;

    /// Enclosure template for cells of `mode`.
    fn enclosure(&self, mode: Decomposition, style: &GridStyle) -> Self::Visual;

    fn verb(&self, glyph: &str, style: &GlyphStyle) -> Self::Visual;

    fn equals(&self, glyph: &str, style: &GlyphStyle) -> Self::Visual;

    fn wrapped_grid(
        &self,
        rows: &[Vec<String>],
        style: &GridStyle,
    ) -> ExprResult<WrappedGrid<Self::Visual>> {
        let grid = self.grid(rows, style)?;
        let mode = style
            .decomposition
            .unwrap_or(self.defaults().matrix.decomposition);
        let template = self.enclosure(mode, style);
        WrappedGrid::new(&grid, mode, Enclosures::Template(template))
    }
}

/// [`VisualFactory`] for the crate's own [`Node`] visuals.
///
/// Text is sized from the monospace metrics in [`Defaults::metrics`], so
/// layouts are stable without a font backend.
#[derive(Clone, Debug, Default)]
pub struct NodeFactory {
    defaults: Defaults,
}

impl NodeFactory {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    fn text(&self, content: &str, font: &str, font_size: f64, color: Color) -> Node {
        let size = self.defaults.metrics.text_size(content, font_size);
        Node::text(content, font, font_size, size, color)
    }
}

impl VisualFactory for NodeFactory {
    type Visual = Node;

    fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    fn grid(&self, rows: &[Vec<String>], style: &GridStyle) -> ExprResult<Grid<Node>> {
        let d = &self.defaults;
        let font = style.font.as_deref().unwrap_or(&d.fonts.mono);
        let font_size = style.font_size.unwrap_or(d.fonts.size);
        let color = style.color.unwrap_or(d.fonts.color);

        let entries = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|label| self.text(label, font, font_size, color))
                    .collect()
            })
            .collect();
        let mut grid = Grid::new(entries)?;
        grid.layout(
            style.v_buff.unwrap_or(d.matrix.v_buff),
            style.h_buff.unwrap_or(d.matrix.h_buff),
            style
                .element_alignment_corner
                .unwrap_or(d.matrix.element_alignment_corner),
        );
        Ok(grid)
    }

    fn enclosure(&self, mode: Decomposition, style: &GridStyle) -> Node {
        let e = &self.defaults.enclosure;
        let size = e.sizes.get(mode);
        let color = style.enclosure_color.unwrap_or(e.color);
        Node::rounded_rectangle(
            size.width,
            size.height,
            e.corner_radius,
            Style::outline(color, e.stroke_width),
        )
    }

    fn verb(&self, glyph: &str, style: &GlyphStyle) -> Node {
        let d = &self.defaults;
        self.text(
            glyph,
            style.font.as_deref().unwrap_or(&d.fonts.mono),
            style.font_size.unwrap_or(d.verb.font_size),
            style.color.unwrap_or(d.verb.color),
        )
    }

    fn equals(&self, glyph: &str, style: &GlyphStyle) -> Node {
        let d = &self.defaults;
        let font_size = style.font_size.unwrap_or(d.equals.font_size);
        let size = d.metrics.text_size(glyph, font_size);
        Node::tex(glyph, font_size, size, style.color.unwrap_or(d.equals.color))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/library/factory.rs"]
mod tests;
