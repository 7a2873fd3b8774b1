//! # Graph Descriptions
//!
//! A graph description consists of a line `n`, a line `m` and `m` non-comment-lines `u v`,
//! each representing an edge `Edge(u, v)` between 0-based nodes.
//!
//! Reading never produces a partially built graph: malformed counts or edges, missing edges,
//! surplus edges and invalid endpoints all result in an error of kind
//! [`ErrorKind::InvalidData`] (or [`ErrorKind::UnexpectedEof`] for missing lines).

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use log::debug;

use super::*;

/// A GraphReader for graph descriptions
#[derive(Debug, Clone)]
pub struct GraphDescriptionReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Policy of the created graph; with `Strict`, invalid edges abort reading
    policy: InsertionPolicy,
}

impl Default for GraphDescriptionReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            policy: InsertionPolicy::Strict,
        }
    }
}

impl GraphDescriptionReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> GraphDescriptionReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the insertion policy.
    /// With [`InsertionPolicy::Permissive`], edges with invalid endpoints are skipped.
    pub fn policy(mut self, policy: InsertionPolicy) -> GraphDescriptionReader {
        self.policy = policy;
        self
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for GraphDescriptionReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = DescriptionLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let n: NumNodes = lines.parse_count("number of nodes")?;
        let m: NumEdges = lines.parse_count("number of edges")?;

        let mut graph = G::try_new(n, self.policy)
            .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;

        for i in 0..m {
            let line = lines.next_non_comment_line()?.ok_or_else(|| {
                io_error!(
                    ErrorKind::UnexpectedEof,
                    format!("Expected {m} edges but found only {i}")
                )
            })?;

            let mut parts = line.split_whitespace();
            let u = parse_next_value!(parts, "Source node");
            let v = parse_next_value!(parts, "Target node");
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Edge line {line:?} has more than two entries")
            );

            graph
                .add_edge(u, v)
                .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;
        }

        raise_error_unless!(
            lines.next_non_comment_line()?.is_none(),
            ErrorKind::InvalidData,
            format!("Found more than the announced {m} edges")
        );

        debug!("Read graph description with {n} nodes and {m} edges");
        Ok(graph)
    }
}

/// Trait for creating graphs from a GraphDescriptionReader.
/// Used as shorthand for default GraphDescriptionReader settings
pub trait GraphDescriptionRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_description<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_description_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_description(BufReader::new(File::open(path)?))
    }
}

impl<G> GraphDescriptionRead for G
where
    G: GraphEdgeEditing,
{
    fn try_read_description<R: BufRead>(reader: R) -> Result<Self> {
        GraphDescriptionReader::default().try_read_graph(reader)
    }
}

/// Lines of a description without empty lines and comments
struct DescriptionLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> DescriptionLines<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Parses a line consisting of a single count
    fn parse_count<T: std::str::FromStr>(&mut self, name: &str) -> Result<T> {
        let line = self.next_non_comment_line()?.ok_or_else(|| {
            io_error!(
                ErrorKind::UnexpectedEof,
                format!("Missing line with the {name}")
            )
        })?;

        let mut parts = line.split_whitespace();
        let count = parse_next_value!(parts, name);
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Line with the {name} has more than one entry")
        );

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use itertools::Itertools;

    use super::*;
    use crate::algo::*;

    fn read<G: GraphEdgeEditing>(input: &str) -> Result<G> {
        G::try_read_description(Cursor::new(input))
    }

    fn kind_of<G: GraphEdgeEditing>(input: &str) -> Option<ErrorKind> {
        read::<G>(input).err().map(|e| e.kind())
    }

    #[test]
    fn read_undirected() {
        let graph: AdjArrayUndir = read("4\n3\n0 1\n1 2\n2 3\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edges(true).collect_vec(), vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
        assert_eq!(graph.insertion_policy(), InsertionPolicy::Strict);
    }

    #[test]
    fn read_directed_with_comments() {
        let input = "# a cycle\n3\n3\n\n0 1\n  1   2  \n# closing arc\n2 0\n";
        let graph: AdjArray = read(input).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.find_cycle(), Some(vec![0, 1, 2, 0]));
    }

    #[test]
    fn read_neighbor_lists() {
        let lists: NeighborLists = read("3\n2\n0 1\n0 2\n").unwrap();
        assert_eq!(lists.as_lists(), &[vec![1, 2], vec![0], vec![0]]);
        assert!(lists.is_bipartite());
    }

    #[test]
    fn custom_comment_identifier() {
        let reader = GraphDescriptionReader::new().comment_identifier("c");
        let graph: AdjSetUndir = reader.try_read_graph(Cursor::new("c comment\n2\n1\n1 0\n")).unwrap();
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn malformed_counts() {
        assert_eq!(kind_of::<AdjArrayUndir>(""), Some(ErrorKind::UnexpectedEof));
        assert_eq!(kind_of::<AdjArrayUndir>("4\n"), Some(ErrorKind::UnexpectedEof));
        assert_eq!(kind_of::<AdjArrayUndir>("four\n0\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("-4\n0\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("4 2\n0\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("0\n0\n"), Some(ErrorKind::InvalidData));
    }

    #[test]
    fn malformed_edges() {
        assert_eq!(kind_of::<AdjArrayUndir>("3\n2\n0 1\n"), Some(ErrorKind::UnexpectedEof));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n0 1\n1 2\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n0\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n0 1 2\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n0 x\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n0 3\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArrayUndir>("3\n1\n1 1\n"), Some(ErrorKind::InvalidData));
        assert_eq!(kind_of::<AdjArray>("3\n1\n1 1\n"), None);
    }

    #[test]
    fn permissive_reading_skips_invalid_edges() {
        crate::testing::init_test_logger();
        let reader = GraphDescriptionReader::new().policy(InsertionPolicy::Permissive);
        let graph: AdjArrayUndir = reader
            .try_read_graph(Cursor::new("3\n3\n0 1\n0 3\n2 2\n"))
            .unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.insertion_policy(), InsertionPolicy::Permissive);
    }
}
