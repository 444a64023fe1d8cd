use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Zero-based position of a vertex in the original enumeration.
///
/// Distinct from the 1-based group label stored on disk.
pub type VertexIndex = usize;

/// One group of vertices sharing a label in the source format.
///
/// Members are stored as a sequence for convenience; membership order is not
/// semantically meaningful, and equality between communities ignores it.
#[derive(Clone, Debug, Default)]
pub struct Community {
    members: Vec<VertexIndex>,
}

impl Community {
    /// Create an empty community.
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// The member vertices, in storage order.
    pub fn members(&self) -> &[VertexIndex] {
        &self.members
    }

    /// The number of vertices in the community.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the community has no vertices.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn push(&mut self, vertex: VertexIndex) {
        self.members.push(vertex);
    }
}

impl From<Vec<VertexIndex>> for Community {
    fn from(members: Vec<VertexIndex>) -> Self {
        Self { members }
    }
}

impl PartialEq for Community {
    fn eq(&self, other: &Self) -> bool {
        if self.members.len() != other.members.len() {
            return false;
        }
        let mut lhs = self.members.clone();
        let mut rhs = other.members.clone();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }
}

impl Eq for Community {}

/// Struct that represents a community assignment over a numbered vertex set.
///
/// Community order is significant: for a parsed partition it is the order in
/// which distinct labels were first encountered; for a directly constructed
/// one it is the caller-supplied order.
///
/// A partition is well formed when its communities together hold each vertex
/// index `0..N` exactly once, for `N` the total member count. Construction
/// does not enforce this; [`Partition::memberships`] and the generator
/// require it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    communities: Vec<Community>,
}

impl Partition {
    /// Create an empty partition with zero communities.
    pub fn new() -> Self {
        Self { communities: Vec::new() }
    }

    /// Create a partition from communities in the given order.
    pub fn from_communities(communities: Vec<Community>) -> Self {
        Self { communities }
    }

    /// Group a flat label-per-vertex sequence into a partition.
    ///
    /// Vertex `i` joins the community of the `i`-th label; communities are
    /// ordered by the first appearance of their label, not by label value.
    pub fn from_memberships<L, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Eq + Hash,
    {
        let mut communities: Vec<Community> = Vec::new();
        let mut community_of_label: FxHashMap<L, usize> = FxHashMap::default();

        for (vertex, label) in labels.into_iter().enumerate() {
            let community_id = *community_of_label.entry(label).or_insert_with(|| {
                communities.push(Community::new());
                communities.len() - 1
            });
            communities[community_id].push(vertex);
        }

        Self { communities }
    }

    /// The community index owning each vertex, as a flat array indexed by
    /// vertex: `memberships()[v]` is the position of the community holding
    /// `v`. Inverse of [`Partition::from_memberships`].
    ///
    /// # Panics
    ///
    /// Panics if the partition is not well formed, i.e. when some vertex
    /// index is out of range for the total member count or appears in more
    /// than one community.
    pub fn memberships(&self) -> Vec<usize> {
        let vertex_count = self.vertex_count();
        let mut owner = vec![usize::MAX; vertex_count];

        for (community_id, community) in self.communities.iter().enumerate() {
            for &vertex in community.members() {
                assert!(
                    vertex < vertex_count,
                    "vertex index {vertex} is out of range for a partition of {vertex_count} vertices",
                );
                assert!(
                    owner[vertex] == usize::MAX,
                    "vertex index {vertex} appears in more than one community",
                );
                owner[vertex] = community_id;
            }
        }

        // vertex_count members landed in vertex_count distinct slots, so
        // every slot is filled.
        owner
    }

    /// The communities, in partition order.
    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    /// The number of communities.
    pub fn community_count(&self) -> usize {
        self.communities.len()
    }

    /// The total number of vertices across all communities.
    pub fn vertex_count(&self) -> usize {
        self.communities.iter().map(Community::len).sum()
    }

    /// Whether the partition has no communities.
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}

impl From<Vec<Vec<VertexIndex>>> for Partition {
    fn from(communities: Vec<Vec<VertexIndex>>) -> Self {
        Self {
            communities: communities.into_iter().map(Community::from).collect(),
        }
    }
}
