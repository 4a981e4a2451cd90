//! Cell arrays in the legacy counted layout.
//!
//! A [`CellArray`] stores its cells as one flat buffer where every cell is
//! prefixed with its point count: `[n0, id, id, .., n1, id, ..]`. A side table
//! of cell offsets gives constant-time access to individual cells.

use crate::error::{PolydataError, Result};
use crate::index::{IndexBuffer, IndexWidth};

/// A list of cells sharing one kind (vertices, lines or polygons).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellArray {
    buffer: IndexBuffer,
    /// Position of each cell's count word in `buffer`.
    offsets: Vec<usize>,
}

impl CellArray {
    /// Creates an empty cell array with the given index width.
    #[must_use]
    pub fn new(width: IndexWidth) -> Self {
        Self {
            buffer: IndexBuffer::new(width),
            offsets: Vec::new(),
        }
    }

    /// Creates an empty cell array with room for `cells` cells of `ids_per_cell` ids.
    #[must_use]
    pub fn with_capacity(width: IndexWidth, cells: usize, ids_per_cell: usize) -> Self {
        Self {
            buffer: IndexBuffer::with_capacity(width, cells * (ids_per_cell + 1)),
            offsets: Vec::with_capacity(cells),
        }
    }

    /// Adopts a flat counted buffer holding exactly `num_cells` cells.
    ///
    /// Fails if the count prefixes run past the end of the buffer or if
    /// words are left over after the last cell.
    pub fn from_legacy(num_cells: usize, buffer: IndexBuffer) -> Result<Self> {
        let mut offsets = Vec::with_capacity(num_cells.min(buffer.len()));
        let mut pos: usize = 0;
        for cell in 0..num_cells {
            let count = buffer.get(pos).ok_or_else(|| {
                PolydataError::MalformedCells(format!(
                    "buffer ends before cell {cell} of {num_cells}"
                ))
            })?;
            offsets.push(pos);
            pos = match count.checked_add(1).and_then(|n| pos.checked_add(n)) {
                Some(next) if next <= buffer.len() => next,
                _ => {
                    return Err(PolydataError::MalformedCells(format!(
                        "cell {cell} claims {count} ids but the buffer is too short"
                    )))
                }
            };
        }
        if pos != buffer.len() {
            return Err(PolydataError::MalformedCells(format!(
                "{} trailing words after {num_cells} cells",
                buffer.len() - pos
            )));
        }
        Ok(Self { buffer, offsets })
    }

    /// Appends a cell referencing the given point ids.
    ///
    /// The cell is either appended whole or not at all.
    pub fn insert_next_cell(&mut self, ids: &[usize]) -> Result<()> {
        self.buffer.check(ids.len())?;
        for &id in ids {
            self.buffer.check(id)?;
        }
        self.offsets.push(self.buffer.len());
        self.buffer.push(ids.len())?;
        for &id in ids {
            self.buffer.push(id)?;
        }
        Ok(())
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the index word width.
    #[must_use]
    pub fn width(&self) -> IndexWidth {
        self.buffer.width()
    }

    /// Returns the total number of point ids over all cells.
    #[must_use]
    pub fn connectivity_len(&self) -> usize {
        self.buffer.len() - self.offsets.len()
    }

    /// Returns the underlying counted buffer.
    #[must_use]
    pub fn buffer(&self) -> &IndexBuffer {
        &self.buffer
    }

    /// Returns the number of ids in cell `i`.
    #[must_use]
    pub fn cell_len(&self, i: usize) -> Option<usize> {
        self.offsets.get(i).and_then(|&pos| self.buffer.get(pos))
    }

    /// Returns the point ids of cell `i`.
    #[must_use]
    pub fn cell(&self, i: usize) -> Option<Vec<usize>> {
        let pos = *self.offsets.get(i)?;
        let count = self.buffer.get(pos)?;
        Some(
            (pos + 1..pos + 1 + count)
                .filter_map(|p| self.buffer.get(p))
                .collect(),
        )
    }

    /// Iterates over the point ids of every cell.
    pub fn iter(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.num_cells()).filter_map(move |i| self.cell(i))
    }

    /// Returns the first cell holding an id of at least `limit`, with that id.
    #[must_use]
    pub fn find_id_at_least(&self, limit: usize) -> Option<(usize, usize)> {
        self.offsets.iter().enumerate().find_map(|(row, &pos)| {
            let count = self.buffer.get(pos)?;
            (pos + 1..=pos + count)
                .filter_map(|p| self.buffer.get(p))
                .find(|&id| id >= limit)
                .map(|id| (row, id))
        })
    }
}
