use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        color::Color,
        core::Direction,
        error::{ExprError, ExprResult},
    },
    grid::matrix::Decomposition,
};

/// Style defaults for every visual the factory builds.
///
/// Every section (and every field inside it) is optional in TOML; missing
/// values fall back to [`Defaults::default`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub fonts: Fonts,
    pub matrix: MatrixDefaults,
    pub enclosure: EnclosureDefaults,
    pub verb: GlyphDefaults,
    pub equals: GlyphDefaults,
    pub grouping: GroupingDefaults,
    pub metrics: Metrics,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fonts {
    pub mono: String,
    pub sans: String,
    pub color: Color,
    pub size: f64,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            mono: "DejaVu Sans Mono".to_owned(),
            sans: "DejaVu Sans".to_owned(),
            color: Color::WHITE,
            size: 36.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixDefaults {
    pub decomposition: Decomposition,
    pub v_buff: f64,
    pub h_buff: f64,
    pub element_alignment_corner: Direction,
    pub palette: Palette,
}

impl Default for MatrixDefaults {
    fn default() -> Self {
        Self {
            decomposition: Decomposition::Entries,
            v_buff: 0.8,
            h_buff: 1.3,
            element_alignment_corner: Direction::DownRight,
            palette: Palette::default(),
        }
    }
}

/// Colors for operand and result terms of an expression.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub operand: Color,
    pub result: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            operand: Color::BLUE,
            result: Color::YELLOW,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnclosureDefaults {
    pub color: Color,
    pub stroke_width: f64,
    pub corner_radius: f64,
    pub sizes: EnclosureSizes,
}

impl Default for EnclosureDefaults {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            stroke_width: 2.0,
            corner_radius: 0.1,
            sizes: EnclosureSizes::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Enclosure size for each decomposition mode.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnclosureSizes {
    pub rows: Size,
    pub columns: Size,
    pub entries: Size,
}

impl EnclosureSizes {
    pub fn get(&self, mode: Decomposition) -> Size {
        match mode {
            Decomposition::Rows => self.rows,
            Decomposition::Columns => self.columns,
            Decomposition::Entries => self.entries,
        }
    }
}

impl Default for EnclosureSizes {
    fn default() -> Self {
        Self {
            rows: Size::new(3.6, 0.7),
            columns: Size::new(0.7, 2.2),
            entries: Size::new(0.7, 0.7),
        }
    }
}

/// Defaults for a single glyph (verb or equals sign).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphDefaults {
    pub color: Color,
    pub font_size: f64,
}

impl Default for GlyphDefaults {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            font_size: 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupingDefaults {
    pub buff: f64,
}

impl Default for GroupingDefaults {
    fn default() -> Self {
        Self { buff: 0.4 }
    }
}

/// Monospace text metrics, in scene units per point of font size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metrics {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            char_width: 0.0125,
            line_height: 0.0125,
        }
    }
}

impl Metrics {
    /// Box occupied by `text` at `font_size`: longest line by line count.
    pub fn text_size(&self, text: &str, font_size: f64) -> (f64, f64) {
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        (
            widest as f64 * self.char_width * font_size,
            lines as f64 * self.line_height * font_size,
        )
    }
}

impl Defaults {
    pub fn from_toml_str(s: &str) -> ExprResult<Self> {
        let defaults: Self = toml::from_str(s).map_err(|e| ExprError::config(e.to_string()))?;
        defaults.validate()?;
        Ok(defaults)
    }

    pub fn load(path: impl AsRef<Path>) -> ExprResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read defaults '{}'", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> ExprResult<()> {
        let positive = [
            ("fonts.size", self.fonts.size),
            ("verb.font_size", self.verb.font_size),
            ("equals.font_size", self.equals.font_size),
            ("metrics.char_width", self.metrics.char_width),
            ("metrics.line_height", self.metrics.line_height),
        ];
        for (key, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(ExprError::config(format!("{key} must be > 0, got {v}")));
            }
        }
        let non_negative = [
            ("matrix.v_buff", self.matrix.v_buff),
            ("matrix.h_buff", self.matrix.h_buff),
            ("enclosure.stroke_width", self.enclosure.stroke_width),
            ("enclosure.corner_radius", self.enclosure.corner_radius),
            ("grouping.buff", self.grouping.buff),
        ];
        for (key, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ExprError::config(format!("{key} must be >= 0, got {v}")));
            }
        }
        Ok(())
    }
}

/// Per-call overrides for a wrapped grid. `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridStyle {
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<Color>,
    pub decomposition: Option<Decomposition>,
    pub v_buff: Option<f64>,
    pub h_buff: Option<f64>,
    pub element_alignment_corner: Option<Direction>,
    pub enclosure_color: Option<Color>,
}

/// Per-call overrides for a verb or equals glyph.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphStyle {
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<Color>,
}

#[cfg(test)]
#[path = "../../tests/unit/library/config.rs"]
mod tests;
