//! Type-level edge orientation markers for [`super::Graph`].

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Edge orientation of a [`super::Graph`].
///
/// Sealed: only [`Directed`] and [`Undirected`] implement it.
pub trait Orientation:
    sealed::Sealed + Clone + Copy + Default + Eq + Send + Sync + std::fmt::Debug + 'static
{
    /// `true` when adjacency sets hold outgoing edges only.
    const DIRECTED: bool;
    /// Label used in logs and summaries.
    const LABEL: &'static str;
}

/// Marker for graphs whose adjacency sets hold outgoing edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for graphs whose adjacency sets are symmetric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Orientation for Directed {
    const DIRECTED: bool = true;
    const LABEL: &'static str = "directed";
}

impl Orientation for Undirected {
    const DIRECTED: bool = false;
    const LABEL: &'static str = "undirected";
}
