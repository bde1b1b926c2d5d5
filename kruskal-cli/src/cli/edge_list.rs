//! Whitespace-separated edge list input.
//!
//! Each non-blank line holds `left right weight`. Text after `#` is ignored.
//! Node labels are registered in order of first appearance so node handles are
//! stable across runs over the same file.

use std::collections::HashMap;
use std::io::{self, BufRead};
use std::num::ParseIntError;

use kruskal_core::{Graph, GraphBuilder, TieBreak};
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line did not contain exactly three fields.
    #[error("line {line}: expected `left right weight`, found {found} field(s)")]
    FieldCount {
        /// One-based line number.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// The weight field was not an integer.
    #[error("line {line}: invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// Weight text as written.
        raw: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Parsed edge list with labels interned in first-appearance order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeList {
    labels: Vec<String>,
    edges: Vec<(usize, usize, i64)>,
}

impl EdgeList {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails or a line is malformed.
    ///
    /// # Examples
    /// ```
    /// use kruskal_cli::cli::EdgeList;
    ///
    /// let input = "# cities\nboston sf 7\nsf chicago 3 # inland\n";
    /// let list = EdgeList::parse(input.as_bytes())?;
    /// assert_eq!(list.labels(), ["boston", "sf", "chicago"]);
    /// assert_eq!(list.edge_count(), 2);
    /// # Ok::<(), kruskal_cli::cli::EdgeListError>(())
    /// ```
    pub fn parse(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut list = Self::default();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (offset, line) in reader.lines().enumerate() {
            let number = offset + 1;
            let line = line.map_err(|source| EdgeListError::Read {
                line: number,
                source,
            })?;
            let content = line.split('#').next().unwrap_or_default();
            let fields: Vec<&str> = content.split_whitespace().collect();
            let [left, right, weight] = fields.as_slice() else {
                if fields.is_empty() {
                    continue;
                }
                return Err(EdgeListError::FieldCount {
                    line: number,
                    found: fields.len(),
                });
            };

            let weight = weight
                .parse::<i64>()
                .map_err(|source| EdgeListError::InvalidWeight {
                    line: number,
                    raw: (*weight).to_owned(),
                    source,
                })?;
            let left = list.intern(&mut index, left);
            let right = list.intern(&mut index, right);
            list.edges.push((left, right, weight));
        }
        Ok(list)
    }

    fn intern(&mut self, index: &mut HashMap<String, usize>, label: &str) -> usize {
        if let Some(&position) = index.get(label) {
            return position;
        }
        let position = self.labels.len();
        self.labels.push(label.to_owned());
        index.insert(label.to_owned(), position);
        position
    }

    /// Node labels in first-appearance order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of parsed edge lines.
    #[rustfmt::skip]
    #[must_use]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Builds a graph holding every label as a node and every line as an edge.
    #[must_use]
    pub fn into_graph(self, tie_break: TieBreak) -> Graph<String> {
        let mut graph = GraphBuilder::new()
            .with_node_capacity(self.labels.len())
            .with_edge_capacity(self.edges.len())
            .with_tie_break(tie_break)
            .build();
        let ids: Vec<_> = self
            .labels
            .into_iter()
            .map(|label| graph.add_node(label))
            .collect();
        for (left, right, weight) in self.edges {
            if let (Some(&left), Some(&right)) = (ids.get(left), ids.get(right)) {
                graph.add_edge(left, right, weight);
            }
        }
        graph
    }
}
