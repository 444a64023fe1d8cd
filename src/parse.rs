use std::fmt;

use tracing::trace;

use crate::partition::Partition;

/// Common errors thrown by the parser.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// A `*Vertices` line was found but is not `*Vertices <count>`.
    MalformedHeader { line: String },

    /// The header declared more assignment lines than the input holds.
    PrematureEof { expected: usize, actual: usize },

    /// An assignment line is not parseable as an integer label.
    InvalidLabel { line: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedHeader { line } => {
                write!(f, "malformed header line {line:?} (expected \"*Vertices <count>\")")
            }
            ParseError::PrematureEof { expected, actual } => write!(
                f,
                "input ended early (header declared {expected} vertices, got {actual} assignment lines)",
            ),
            ParseError::InvalidLabel { line } => {
                write!(f, "assignment line {line:?} is not an integer label")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a `.clu` document held in a single string.
///
/// The string is split on `\n`; a carriage return left by CRLF input is
/// absorbed when each line is parsed.
///
/// # Example
///
/// ```rust
/// use pajek_clu::parse;
///
/// # fn main() -> Result<(), pajek_clu::ParseError> {
/// let partition = parse("*Vertices 4\n1\n2\n1\n2")?;
///
/// assert_eq!(partition.community_count(), 2);
/// assert_eq!(partition.communities()[0].members(), [0, 2]);
/// assert_eq!(partition.communities()[1].members(), [1, 3]);
/// # Ok(())
/// # }
/// ```
pub fn parse(text: &str) -> Result<Partition, ParseError> {
    parse_lines(text.split('\n'))
}

/// Parse an already line-split `.clu` document.
///
/// Lines before the `*Vertices` header are skipped. The header's count `N`
/// fixes how many assignment lines follow; vertex `i` (zero-based) joins the
/// community of the label on the `i`-th of them, and communities are ordered
/// by first appearance of their label. Lines after the `N`-th assignment are
/// ignored.
///
/// An input with no header at all yields an empty partition rather than an
/// error, so callers can feed files that merely lack the section.
pub fn parse_lines<I, S>(lines: I) -> Result<Partition, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    // Seek the header, skipping any preamble.
    let vertex_count = loop {
        let Some(line) = lines.next() else {
            return Ok(Partition::new());
        };
        let line = line.as_ref();
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(keyword) if keyword.eq_ignore_ascii_case("*vertices") => {
                let count = tokens.next().and_then(|token| token.parse::<usize>().ok());
                match (count, tokens.next()) {
                    (Some(count), None) => break count,
                    _ => return Err(ParseError::MalformedHeader { line: line.to_string() }),
                }
            }
            _ => trace!("skipping preamble line {line:?}"),
        }
    };
    trace!("found *Vertices header declaring {vertex_count} vertices");

    // One label per vertex. Negative labels are accepted; they group like
    // any other label and only the count is required to be non-negative.
    let mut labels: Vec<i64> = Vec::with_capacity(vertex_count);
    for consumed in 0..vertex_count {
        let Some(line) = lines.next() else {
            return Err(ParseError::PrematureEof { expected: vertex_count, actual: consumed });
        };
        let line = line.as_ref();
        let label = line
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidLabel { line: line.to_string() })?;
        labels.push(label);
    }

    Ok(Partition::from_memberships(labels))
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    fn members(partition: &Partition, community: usize) -> Vec<usize> {
        partition.communities()[community].members().to_vec()
    }

    #[test]
    fn test_parse_groups_vertices_by_label() {
        // Arrange
        let text = "*Vertices 4\n1\n2\n1\n2";

        // Act
        let partition = parse(text).unwrap();

        // Assert
        assert_eq!(partition.community_count(), 2);
        assert_equal(members(&partition, 0), [0, 2]);
        assert_equal(members(&partition, 1), [1, 3]);
    }

    #[test]
    fn test_parse_orders_communities_by_first_appearance() {
        // Arrange
        let text = "*Vertices 4\n3\n1\n3\n1";

        // Act
        let partition = parse(text).unwrap();

        // Assert: label 3 appeared first, so its community comes first.
        assert_equal(members(&partition, 0), [0, 2]);
        assert_equal(members(&partition, 1), [1, 3]);
    }

    #[test]
    fn test_parse_empty_input_yields_empty_partition() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse_lines(Vec::<&str>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_input_without_header_yields_empty_partition() {
        let partition = parse("% just a comment\nanother line").unwrap();

        assert!(partition.is_empty());
    }

    #[test]
    fn test_parse_skips_preamble_and_matches_header_case_insensitively() {
        // Arrange
        let text = "% produced elsewhere\n\n*vertices 2\n1\n1";

        // Act
        let partition = parse(text).unwrap();

        // Assert
        assert_eq!(partition.community_count(), 1);
        assert_equal(members(&partition, 0), [0, 1]);
    }

    #[test]
    fn test_parse_rejects_header_without_count() {
        let error = parse("*Vertices").unwrap_err();

        assert!(matches!(error, ParseError::MalformedHeader { .. }));
    }

    #[test]
    fn test_parse_rejects_header_with_extra_tokens() {
        let error = parse("*Vertices 4 extra\n1\n1\n1\n1").unwrap_err();

        assert!(matches!(error, ParseError::MalformedHeader { .. }));
    }

    #[test]
    fn test_parse_rejects_non_integer_count() {
        assert!(matches!(parse("*Vertices four").unwrap_err(), ParseError::MalformedHeader { .. }));
        assert!(matches!(parse("*Vertices -1").unwrap_err(), ParseError::MalformedHeader { .. }));
    }

    #[test]
    fn test_parse_premature_eof_reports_counts() {
        // Arrange
        let text = "*Vertices 5\n1\n2\n1";

        // Act
        let error = parse(text).unwrap_err();

        // Assert
        assert!(matches!(error, ParseError::PrematureEof { expected: 5, actual: 3 }));
    }

    #[test]
    fn test_parse_rejects_non_integer_label() {
        let error = parse("*Vertices 2\n1\nabc").unwrap_err();

        assert!(matches!(error, ParseError::InvalidLabel { ref line } if line == "abc"));
    }

    #[test]
    fn test_parse_ignores_lines_after_the_last_assignment() {
        // Arrange
        let text = "*Vertices 2\n1\n2\n*Arcs\n1 2";

        // Act
        let partition = parse(text).unwrap();

        // Assert
        assert_eq!(partition.vertex_count(), 2);
        assert_eq!(partition.community_count(), 2);
    }

    #[test]
    fn test_parse_handles_crlf_line_endings() {
        // Arrange
        let text = "*Vertices 3\r\n1\r\n2\r\n1\r\n";

        // Act
        let partition = parse(text).unwrap();

        // Assert
        assert_equal(members(&partition, 0), [0, 2]);
        assert_equal(members(&partition, 1), [1]);
    }

    #[test]
    fn test_parse_accepts_negative_labels() {
        // Arrange
        let text = "*Vertices 3\n-1\n2\n-1";

        // Act
        let partition = parse(text).unwrap();

        // Assert
        assert_equal(members(&partition, 0), [0, 2]);
        assert_equal(members(&partition, 1), [1]);
    }

    #[test]
    fn test_parse_zero_vertices() {
        let partition = parse("*Vertices 0\ntrailing").unwrap();

        assert!(partition.is_empty());
        assert_eq!(partition.vertex_count(), 0);
    }
}
