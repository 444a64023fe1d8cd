use std::iter;

use crate::partition::Partition;

/// Lazily produce the `.clu` lines for a partition.
///
/// The first line is the `*Vertices <N>` header; line `i + 1` holds the
/// 1-based position of the community owning vertex `i`, whatever order that
/// community stores its members in. Lines carry no terminator; the writer in
/// [`crate::io`] appends CRLF.
///
/// Re-parsing the produced lines yields an equal partition whenever the
/// community order follows first appearance of the members, which holds for
/// every partition built by the parser or by
/// [`Partition::from_memberships`]. For other community orders the grouping
/// survives but communities come back renumbered into first-appearance
/// order.
///
/// # Panics
///
/// Panics if the partition is not well formed, i.e. when its communities do
/// not hold each vertex index `0..N` exactly once (see
/// [`Partition::memberships`]).
pub fn generate(partition: &Partition) -> impl Iterator<Item = String> {
    let owners = partition.memberships();
    let header = format!("*Vertices {}", owners.len());

    iter::once(header).chain(owners.into_iter().map(|community_id| (community_id + 1).to_string()))
}
