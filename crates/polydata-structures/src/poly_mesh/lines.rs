//! Line cells from a flat index sequence.

use polydata_core::error::{CellKind, Result};
use polydata_core::index::IndexWidth;
use polydata_core::CellArray;

use super::strategy::resolve_index;

/// Builds two-point line cells from consecutive pairs of `lines`.
///
/// The sequence is read from its second element: for `[l0, l1, .., ln]` the
/// segments are `(l1, l2), (l2, l3), .., (l(n-1), ln)`, so `l0` is neither
/// used nor validated. Sequences shorter than three elements yield no cells.
/// Line indices are always zero-based; the face index offset does not apply.
pub(crate) fn build_lines(lines: &[i64], point_count: usize, width: IndexWidth) -> Result<CellArray> {
    let mut cells = CellArray::with_capacity(width, lines.len().saturating_sub(2), 2);
    if let Some(first) = lines.first() {
        log::debug!("line sequence of {} indices, leading {first} skipped", lines.len());
    }
    let tail = lines.get(1..).unwrap_or_default();
    for (row, pair) in tail.windows(2).enumerate() {
        let a = resolve_index(pair[0], 0, CellKind::Line, row, point_count)?;
        let b = resolve_index(pair[1], 0, CellKind::Line, row, point_count)?;
        cells.insert_next_cell(&[a, b])?;
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polydata_core::PolydataError;

    #[test]
    fn test_skips_leading_element() {
        let cells = build_lines(&[0, 1, 2, 3], 4, IndexWidth::Wide).unwrap();
        let segs: Vec<Vec<usize>> = cells.iter().collect();
        assert_eq!(segs, vec![vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn test_leading_element_not_validated() {
        let cells = build_lines(&[99, 0, 1], 2, IndexWidth::Wide).unwrap();
        assert_eq!(cells.num_cells(), 1);
    }

    #[test]
    fn test_short_sequences() {
        assert!(build_lines(&[], 4, IndexWidth::Wide).unwrap().is_empty());
        assert!(build_lines(&[0], 4, IndexWidth::Wide).unwrap().is_empty());
        assert!(build_lines(&[0, 1], 4, IndexWidth::Wide).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_segment() {
        let err = build_lines(&[0, 1, 2, 7], 4, IndexWidth::Wide).unwrap_err();
        assert!(matches!(
            err,
            PolydataError::IndexOutOfRange {
                kind: CellKind::Line,
                row: 1,
                index: 7,
                ..
            }
        ));
    }
}
