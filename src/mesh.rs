use crate::errors::Heat1dError;

/// Uniform 1D finite-volume grid over a rod.
///
/// Cell `i` spans nodes `i` and `i+1` and carries one representative
/// temperature at its centroid. Geometry is generated once up front and never
/// mutated afterwards; all fields sit behind read-only accessors.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Rod length [m].
    length: f64,
    /// Number of finite-volume cells.
    n_cells: usize,
    /// Uniform cell width [m], `length / n_cells`.
    dx: f64,
    /// Node coordinates [m], `n_cells + 1` entries, strictly increasing.
    node_x: Vec<f64>,
    /// Cell centroid coordinates [m], midpoint of the bounding nodes.
    centroids: Vec<f64>,
    /// 1-based node pair per cell, kept for result files.
    cell_nodes: Vec<[usize; 2]>,
}

impl Mesh {
    /// Build a uniform grid of `n_cells` cells over `[0, length]`.
    ///
    /// Fails if `length` is not positive and finite, or if `n_cells < 2`: a
    /// single cell would make both boundary rows reference the same neighbor,
    /// which the discretization does not define.
    pub fn uniform(length: f64, n_cells: usize) -> Result<Self, Heat1dError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(Heat1dError::NonPositive {
                name: "length",
                value: length,
            });
        }
        if n_cells < 2 {
            return Err(Heat1dError::TooFewCells { n_cells });
        }

        let dx = length / n_cells as f64;

        let mut node_x = Vec::with_capacity(n_cells + 1);
        node_x.push(0.0);
        for i in 1..n_cells {
            node_x.push(node_x[i - 1] + dx);
        }
        // Pin the last node to the exact rod length so accumulated rounding
        // never shortens the domain.
        node_x.push(length);

        let centroids = (0..n_cells)
            .map(|i| 0.5 * (node_x[i] + node_x[i + 1]))
            .collect();
        let cell_nodes = (0..n_cells).map(|i| [i + 1, i + 2]).collect();

        Ok(Self {
            length,
            n_cells,
            dx,
            node_x,
            centroids,
            cell_nodes,
        })
    }

    /// Rod length [m].
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of cells.
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Uniform cell width [m].
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Node coordinates [m], `n_cells + 1` entries.
    pub fn node_x(&self) -> &[f64] {
        &self.node_x
    }

    /// Cell centroid coordinates [m].
    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    /// 1-based `(left node, right node)` pair per cell.
    pub fn cell_nodes(&self) -> &[[usize; 2]] {
        &self.cell_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_grid_geometry() {
        let mesh = Mesh::uniform(1.0, 5).unwrap();

        assert_eq!(mesh.length(), 1.0);
        assert_eq!(mesh.n_cells(), 5);
        assert_relative_eq!(mesh.dx(), 0.2);

        let expected_nodes = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
        assert_eq!(mesh.node_x().len(), 6);
        for (x, expected) in mesh.node_x().iter().zip(expected_nodes) {
            assert_relative_eq!(*x, expected, epsilon = 1e-12);
        }
        // The endpoint is pinned, not accumulated.
        assert_eq!(*mesh.node_x().last().unwrap(), 1.0);

        let expected_centroids = [0.1, 0.3, 0.5, 0.7, 0.9];
        for (c, expected) in mesh.centroids().iter().zip(expected_centroids) {
            assert_relative_eq!(*c, expected, epsilon = 1e-12);
        }

        assert_eq!(
            mesh.cell_nodes(),
            [[1, 2], [2, 3], [3, 4], [4, 5], [5, 6]]
        );
    }

    #[test]
    fn test_nodes_strictly_increasing() {
        let mesh = Mesh::uniform(50.0, 100).unwrap();
        for w in mesh.node_x().windows(2) {
            assert!(w[0] < w[1], "nodes not increasing: {} >= {}", w[0], w[1]);
        }
        assert_eq!(mesh.node_x().len(), 101);
        assert_eq!(*mesh.node_x().last().unwrap(), mesh.length());
    }

    #[test]
    fn test_single_cell_is_rejected() {
        let err = Mesh::uniform(1.0, 1).unwrap_err();
        assert!(matches!(err, Heat1dError::TooFewCells { n_cells: 1 }));
    }

    #[test]
    fn test_bad_length_is_rejected() {
        assert!(Mesh::uniform(0.0, 5).is_err());
        assert!(Mesh::uniform(-1.0, 5).is_err());
        assert!(Mesh::uniform(f64::NAN, 5).is_err());
    }
}
