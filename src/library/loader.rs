use std::collections::BTreeMap;

use crate::{
    expr::{
        grouping::grouper_with,
        parts::{Part, Parts, Select},
        view::ExpressionView,
    },
    foundation::{core::Direction, error::ExprResult},
    grid::broadcast::Broadcast,
    library::{
        config::{GlyphStyle, GridStyle},
        factory::VisualFactory,
        terms::Library,
    },
};

/// Terms loaded when the caller does not filter.
pub const DEFAULT_TERM_NAMES: [&str; 3] = ["x", "y", "x_plus_y"];

/// Left-to-right order of a dyadic expression `x verb y equals x_plus_y`.
pub const EXPRESSION_ORDER: [&str; 5] = ["x", "verb", "y", "equals", "x_plus_y"];

pub fn default_filter(name: &str) -> bool {
    DEFAULT_TERM_NAMES.contains(&name)
}

/// Reads library entries and builds them with a [`VisualFactory`].
#[derive(Clone, Debug)]
pub struct TermLoader<F> {
    library: Library,
    factory: F,
}

impl<F> TermLoader<F>
where
    F: VisualFactory,
    F::Visual: 'static,
{
    pub fn new(library: Library, factory: F) -> Self {
        Self { library, factory }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// One [`Parts`] of wrapped grids per term set of `topic` / `scene`.
    ///
    /// Only names accepted by `filter` are built; `overrides` holds per-name
    /// grid styles.
    #[tracing::instrument(skip(self, overrides, filter))]
    pub fn terms(
        &self,
        topic: &str,
        scene: &str,
        overrides: &BTreeMap<String, GridStyle>,
        filter: impl Fn(&str) -> bool,
    ) -> ExprResult<Vec<Parts<F::Visual>>> {
        let sets = self.library.terms(topic, scene)?;
        let plain = GridStyle::default();

        let out = sets
            .iter()
            .map(|set| -> ExprResult<Parts<F::Visual>> {
                let mut parts = Parts::new();
                for name in set.names().filter(|n| filter(*n)) {
                    let style = overrides.get(name).unwrap_or(&plain);
                    let grid = self.factory.wrapped_grid(&set.entries(name)?.rows(), style)?;
                    parts.insert(name, grid);
                }
                Ok(parts)
            })
            .collect::<ExprResult<Vec<_>>>()?;
        tracing::debug!(sets = out.len(), "loaded terms");
        Ok(out)
    }

    /// [`TermLoader::terms`] with no overrides and [`default_filter`].
    pub fn default_terms(&self, topic: &str, scene: &str) -> ExprResult<Vec<Parts<F::Visual>>> {
        self.terms(topic, scene, &BTreeMap::new(), default_filter)
    }

    pub fn verb(&self, entry: &str, style: &GlyphStyle) -> ExprResult<F::Visual> {
        Ok(self.factory.verb(self.library.verb(entry)?, style))
    }

    pub fn equals(&self, entry: &str, style: &GlyphStyle) -> ExprResult<F::Visual> {
        Ok(self.factory.equals(self.library.equals(entry)?, style))
    }

    /// Dyadic expression view over `term`, with the optional verb and equals
    /// glyphs added. Parts follow [`EXPRESSION_ORDER`] (other names keep their
    /// order after it); operand items take the palette's operand color and
    /// `x_plus_y` items the result color.
    #[tracing::instrument(skip(self, term))]
    pub fn expression(
        &self,
        mut term: Parts<F::Visual>,
        verb: Option<&str>,
        equals: Option<&str>,
    ) -> ExprResult<ExpressionView<F::Visual>> {
        let glyph = GlyphStyle::default();
        if let Some(entry) = verb {
            term.insert("verb", Part::leaf(self.verb(entry, &glyph)?));
        }
        if let Some(entry) = equals {
            term.insert("equals", Part::leaf(self.equals(entry, &glyph)?));
        }

        let mut order: Vec<String> = EXPRESSION_ORDER
            .iter()
            .filter(|n| term.contains(n))
            .map(|n| (*n).to_owned())
            .collect();
        order.extend(
            term.names()
                .filter(|n| !EXPRESSION_ORDER.contains(n))
                .map(str::to_owned),
        );

        let d = self.factory.defaults();
        let palette = d.matrix.palette;
        let grouper = grouper_with(Direction::Right, d.grouping.buff);
        let mut view = ExpressionView::with_grouper(term, grouper)?;
        view.set_order(order);
        view.reorder(None)?;

        let operands: Vec<&str> = ["x", "y"]
            .into_iter()
            .filter(|n| view.parts().contains(n))
            .collect();
        if !operands.is_empty() {
            view.set_color(Broadcast::items(palette.operand), &Select::parts(operands))?;
        }
        if view.parts().contains("x_plus_y") {
            view.set_color(Broadcast::items(palette.result), &Select::parts(["x_plus_y"]))?;
        }
        Ok(view)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/library/loader.rs"]
mod tests;
