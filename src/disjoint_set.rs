//! Weighted quick-union over grid coordinates.

/// A disjoint-set forest over the cells of a `rows x cols` grid.
///
/// Cells map to node ids via `row * cols + col`. Merges use union by size
/// (the smaller tree is attached under the larger), and `find` walks parent
/// links without path compression, so tree shape reflects union history.
/// That keeps `find` logarithmic, which is plenty at board scale.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent link per node; roots point to themselves.
    parent: Vec<usize>,
    /// Subtree size per node; only meaningful at roots.
    size: Vec<usize>,
    /// Column count of the underlying grid, for coordinate mapping.
    cols: usize,
}

impl DisjointSet {
    /// Creates a forest of `rows * cols` singleton sets.
    pub fn new(rows: usize, cols: usize) -> Self {
        let nodes = rows * cols;
        Self {
            parent: (0..nodes).collect(),
            size: vec![1; nodes],
            cols,
        }
    }

    /// Returns the number of nodes in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Maps a coordinate to its node id.
    pub fn id(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the root of the set containing `node`.
    pub fn find(&self, mut node: usize) -> usize {
        debug_assert!(node < self.parent.len());
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Returns the root of the set containing the cell at `(row, col)`.
    pub fn find_cell(&self, row: usize, col: usize) -> usize {
        self.find(self.id(row, col))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns true if a merge happened, false if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        // Smaller tree under larger; on a tie the second root goes under the first
        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        true
    }

    /// Merges the sets containing the two cells.
    pub fn union_cells(&mut self, row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
        self.union(self.id(row_a, col_a), self.id(row_b, col_b))
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
