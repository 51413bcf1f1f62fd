//! Pinning offsets for fixed columns.
//!
//! A left-fixed column sits after everything to its left, so its offset from
//! the left edge is the sum of the widths before it. A right-fixed column is
//! the mirror image: the sum of the widths after it, accumulated from the
//! right edge inwards. The target column itself is never included.

use crate::data::FixedEdge;

/// Offset of the column at `index` from its pinned edge.
///
/// `widths` holds the resolved width of every column, in column order.
pub fn fixed_offset(edge: FixedEdge, index: usize, widths: &[f64]) -> f64 {
    match edge {
        FixedEdge::Left => widths.iter().take(index).sum(),
        FixedEdge::Right => widths
            .iter()
            .enumerate()
            .rev()
            .take_while(|(position, _)| *position > index)
            .map(|(_, width)| width)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_offsets() {
        // A(50, left), B(60, left), C(40)
        let widths = [50.0, 60.0, 40.0];
        assert_eq!(fixed_offset(FixedEdge::Left, 0, &widths), 0.0);
        assert_eq!(fixed_offset(FixedEdge::Left, 1, &widths), 50.0);
    }

    #[test]
    fn test_right_offsets() {
        // X(30), Y(20, right), Z(10, right)
        let widths = [30.0, 20.0, 10.0];
        assert_eq!(fixed_offset(FixedEdge::Right, 2, &widths), 0.0);
        assert_eq!(fixed_offset(FixedEdge::Right, 1, &widths), 10.0);
    }

    #[test]
    fn test_offsets_include_unpinned_neighbours() {
        let widths = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(fixed_offset(FixedEdge::Left, 3, &widths), 60.0);
        assert_eq!(fixed_offset(FixedEdge::Right, 0, &widths), 90.0);
    }

    #[test]
    fn test_out_of_range_index() {
        let widths = [10.0, 20.0];
        assert_eq!(fixed_offset(FixedEdge::Left, 5, &widths), 30.0);
        assert_eq!(fixed_offset(FixedEdge::Right, 5, &widths), 0.0);
        assert_eq!(fixed_offset(FixedEdge::Left, 0, &[]), 0.0);
    }
}
