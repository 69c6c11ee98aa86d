use std::{collections::BTreeMap, fmt, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{ExprError, ExprResult};

/// One matrix entry as written in the library: a number or a string.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Matrix contents in any of the accepted spellings: a nested array of rows,
/// a flat array (one row) or a single scalar (a 1x1 matrix).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Entries {
    Rows(Vec<Vec<Scalar>>),
    Row(Vec<Scalar>),
    Single(Scalar),
}

impl Entries {
    /// Entry labels, row by row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let row = |r: &[Scalar]| r.iter().map(Scalar::to_string).collect::<Vec<_>>();
        match self {
            Self::Rows(rows) => rows.iter().map(|r| row(r)).collect(),
            Self::Row(r) => vec![row(r)],
            Self::Single(s) => vec![vec![s.to_string()]],
        }
    }
}

/// One set of named terms for a scene (e.g. `x`, `y`, `x_plus_y`), in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermSet {
    entries: Vec<(String, toml::Value)>,
}

impl TermSet {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the contents of term `name`.
    pub fn entries(&self, name: &str) -> ExprResult<Entries> {
        let (_, value) = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| ExprError::config(format!("no term '{name}' in term set")))?;
        value
            .clone()
            .try_into::<Entries>()
            .map_err(|e| ExprError::config(format!("term '{name}': {e}")))
    }
}

/// Term, verb and equals tables of an explainer series.
///
/// `matrices.<topic>.<scene>` is an array of term sets; `verb.<entry>` and
/// `equals.<entry>` map entry keys to glyph strings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Library {
    matrices: toml::Table,
    verb: BTreeMap<String, String>,
    equals: BTreeMap<String, String>,
}

impl Library {
    pub fn from_toml_str(s: &str) -> ExprResult<Self> {
        toml::from_str(s).map_err(|e| ExprError::config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ExprResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read library '{}'", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }

    pub fn scenes(&self, topic: &str) -> ExprResult<Vec<&str>> {
        Ok(self.topic(topic)?.keys().map(String::as_str).collect())
    }

    fn topic(&self, topic: &str) -> ExprResult<&toml::Table> {
        self.matrices
            .get(topic)
            .ok_or_else(|| ExprError::config(format!("unknown topic '{topic}'")))?
            .as_table()
            .ok_or_else(|| ExprError::config(format!("topic '{topic}' is not a table")))
    }

    /// Term sets for `topic` / `scene`, in file order.
    pub fn terms(&self, topic: &str, scene: &str) -> ExprResult<Vec<TermSet>> {
        let sets = self
            .topic(topic)?
            .get(scene)
            .ok_or_else(|| ExprError::config(format!("unknown scene '{topic}.{scene}'")))?
            .as_array()
            .ok_or_else(|| {
                ExprError::config(format!("'{topic}.{scene}' is not an array of term sets"))
            })?;

        sets.iter()
            .enumerate()
            .map(|(i, set)| {
                let table = set.as_table().ok_or_else(|| {
                    ExprError::config(format!("'{topic}.{scene}[{i}]' is not a table"))
                })?;
                Ok(TermSet {
                    entries: table.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                })
            })
            .collect()
    }

    pub fn verb(&self, entry: &str) -> ExprResult<&str> {
        self.verb
            .get(entry)
            .map(String::as_str)
            .ok_or_else(|| ExprError::config(format!("unknown verb '{entry}'")))
    }

    pub fn equals(&self, entry: &str) -> ExprResult<&str> {
        self.equals
            .get(entry)
            .map(String::as_str)
            .ok_or_else(|| ExprError::config(format!("unknown equals '{entry}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/library/terms.rs"]
mod tests;
