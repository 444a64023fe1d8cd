//! Read and write Pajek `.clu` partition files.
//!
//! A `.clu` file assigns each vertex of a numbered vertex set to a
//! community: a `*Vertices <N>` header followed by `N` lines, where the
//! `i`-th line holds the 1-based group label of vertex `i` (zero-based).
//! The in-memory [`Partition`] instead stores each community as the set of
//! vertex indices it owns, ordered by first appearance of its label.
//!
//! # Example
//!
//! ```rust
//! use pajek_clu::{generate, parse};
//!
//! # fn main() -> Result<(), pajek_clu::ParseError> {
//! let partition = parse("*Vertices 4\n1\n2\n1\n2")?;
//! assert_eq!(partition.community_count(), 2);
//!
//! let lines: Vec<String> = generate(&partition).collect();
//! assert_eq!(lines, ["*Vertices 4", "1", "2", "1", "2"]);
//! # Ok(())
//! # }
//! ```

pub mod generate;
pub mod io;
pub mod parse;
pub mod partition;

pub use crate::generate::generate;
pub use crate::io::{read_clu_as_partition, read_partition, write_partition, write_partition_to_clu_file, ReadError};
pub use crate::parse::{parse, parse_lines, ParseError};
pub use crate::partition::{Community, Partition, VertexIndex};
