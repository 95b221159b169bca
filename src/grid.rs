//! Finite-element grid contract consumed by the analytical forward model.
//!
//! The forward model only needs two things from a grid: the ordered node table and a
//! resolver from electrode identifiers to node indices. [`ElectrodeGrid`] captures exactly
//! that, so any mesh representation can be plugged in. [`FeGrid`] is a minimal in-memory
//! implementation.

use crate::math::{R2, Scalar};

/// Single grid node with its position in the (x, y) section plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridNode {
    /// Node index; equals the node's position in the node table.
    pub index: usize,
    /// Position in meters.
    pub position: R2,
}

impl GridNode {
    /// Creates a node at (`x`, `y`).
    #[must_use]
    pub fn new(index: usize, x: Scalar, y: Scalar) -> Self {
        Self { index, position: R2::new(x, y) }
    }
}

/// Errors raised by grid lookups and grid construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The electrode identifier has no node in this grid.
    #[error("electrode {electrode} does not resolve to a grid node ({available} electrodes)")]
    UnknownElectrode {
        /// Identifier that failed to resolve.
        electrode: usize,
        /// Number of electrodes known to the grid.
        available: usize,
    },
    /// An electrode refers to a node index outside the node table.
    #[error("electrode {electrode} points to node {node}, but the grid has {node_count} nodes")]
    DanglingElectrode {
        /// Electrode identifier.
        electrode: usize,
        /// Referenced node index.
        node: usize,
        /// Size of the node table.
        node_count: usize,
    },
    /// A node's stored index disagrees with its position in the table.
    #[error("node at position {position} carries index {index}")]
    UnorderedNode {
        /// Position in the node table.
        position: usize,
        /// Index stored on the node.
        index: usize,
    },
}

/// Narrow view of a finite-element grid.
///
/// Implementations must keep `nodes()` stable: entry `i` is node `i`, and the table length
/// sizes every potential field computed on the grid.
pub trait ElectrodeGrid {
    /// Resolves an electrode identifier to a node index.
    ///
    /// The identifier is used as given; callers decide which indexing convention they pass.
    fn electrode_node(&self, electrode: usize) -> Result<usize, GridError>;

    /// Ordered node table.
    fn nodes(&self) -> &[GridNode];

    /// Number of nodes in the grid.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Position of the node that `electrode` resolves to.
    fn electrode_position(&self, electrode: usize) -> Result<R2, GridError> {
        let node = self.electrode_node(electrode)?;
        self.nodes()
            .get(node)
            .map(|n| n.position)
            .ok_or(GridError::DanglingElectrode {
                electrode,
                node,
                node_count: self.node_count(),
            })
    }
}

impl<G: ElectrodeGrid + ?Sized> ElectrodeGrid for &G {
    fn electrode_node(&self, electrode: usize) -> Result<usize, GridError> {
        (**self).electrode_node(electrode)
    }

    fn nodes(&self) -> &[GridNode] {
        (**self).nodes()
    }
}

/// In-memory grid: a node table plus an electrode list.
///
/// Electrodes are numbered from 1 in list order, so [`ElectrodeGrid::electrode_node`] with
/// key `k` returns entry `k - 1` of the list. Key 0 never resolves.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FeGrid {
    nodes: Vec<GridNode>,
    electrodes: Vec<usize>,
}

impl FeGrid {
    /// Builds a grid, checking node ordering and that every electrode references a node.
    pub fn new(nodes: Vec<GridNode>, electrodes: Vec<usize>) -> Result<Self, GridError> {
        if let Some((position, node)) = nodes.iter().enumerate().find(|(i, n)| n.index != *i) {
            return Err(GridError::UnorderedNode { position, index: node.index });
        }
        if let Some((k, &node)) = electrodes.iter().enumerate().find(|(_, n)| **n >= nodes.len()) {
            return Err(GridError::DanglingElectrode {
                electrode: k + 1,
                node,
                node_count: nodes.len(),
            });
        }
        Ok(Self { nodes, electrodes })
    }

    /// Builds a grid from raw coordinates, numbering nodes in the given order.
    pub fn from_positions(
        positions: impl IntoIterator<Item = (Scalar, Scalar)>,
        electrodes: Vec<usize>,
    ) -> Result<Self, GridError> {
        let nodes = positions
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| GridNode::new(i, x, y))
            .collect();
        Self::new(nodes, electrodes)
    }

    /// Regular rectangular grid with nodes numbered row by row (x fastest), where every
    /// node of the top row (`y = ys[0]`) carries an electrode, left to right.
    pub fn rectangular(xs: &[Scalar], ys: &[Scalar]) -> Result<Self, GridError> {
        let positions = ys.iter().flat_map(|&y| xs.iter().map(move |&x| (x, y)));
        let electrodes = if ys.is_empty() { Vec::new() } else { (0..xs.len()).collect() };
        Self::from_positions(positions, electrodes)
    }

    /// Node indices of all electrodes; entry `k` belongs to electrode `k + 1`.
    #[must_use]
    pub fn electrodes(&self) -> &[usize] {
        &self.electrodes
    }
}

impl ElectrodeGrid for FeGrid {
    fn electrode_node(&self, electrode: usize) -> Result<usize, GridError> {
        electrode
            .checked_sub(1)
            .and_then(|k| self.electrodes.get(k))
            .copied()
            .ok_or(GridError::UnknownElectrode {
                electrode,
                available: self.electrodes.len(),
            })
    }

    fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }
}
