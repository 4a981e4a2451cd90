//! Polygon cell construction strategies.
//!
//! Uniform face tables with zero-based indices are written in one bulk pass
//! ([`BulkStrategy`]); everything else goes face by face
//! ([`IncrementalStrategy`]). [`select_strategy`] is the single predicate
//! choosing between them.

use std::iter;

use polydata_core::error::{CellKind, PolydataError, Result};
use polydata_core::index::{IndexBuffer, IndexWidth};
use polydata_core::options::Options;
use polydata_core::progress::ProgressObserver;
use polydata_core::CellArray;

/// Which strategy a build uses for its polygon cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// One flat buffer written in a single pass.
    Bulk,
    /// Faces inserted one at a time.
    Incremental,
}

/// Returns the common row length, or `None` for a ragged or empty table.
pub fn uniform_row_len<F: AsRef<[i64]>>(faces: &[F]) -> Option<usize> {
    let first = faces.first()?.as_ref().len();
    faces
        .iter()
        .all(|f| f.as_ref().len() == first)
        .then_some(first)
}

/// Picks the strategy for a face table.
///
/// The bulk path needs uniform rows, a zero index offset and the fast path
/// enabled. Four-index rows always go through the incremental path, which
/// splits them into triangles.
pub fn select_strategy<F: AsRef<[i64]>>(
    options: &Options,
    index_offset: i64,
    faces: &[F],
) -> StrategyKind {
    match uniform_row_len(faces) {
        Some(k) if options.fast_path && index_offset == 0 && k != 4 => StrategyKind::Bulk,
        _ => StrategyKind::Incremental,
    }
}

/// Shared inputs for a polygon build.
pub struct BuildContext<'a> {
    /// Number of points the cells may reference.
    pub point_count: usize,
    /// Value subtracted from every raw face index.
    pub index_offset: i64,
    /// Word width of the produced cell buffer.
    pub width: IndexWidth,
    /// Observer notified as faces are processed.
    pub progress: Option<&'a mut dyn ProgressObserver>,
    /// Faces between two notifications.
    pub progress_stride: usize,
}

impl BuildContext<'_> {
    /// Creates a context without progress reporting.
    pub fn new(point_count: usize, index_offset: i64, width: IndexWidth) -> Self {
        Self {
            point_count,
            index_offset,
            width,
            progress: None,
            progress_stride: 1,
        }
    }

    fn report(&mut self, done: usize, total: usize) {
        if let Some(observer) = self.progress.as_deref_mut() {
            if done == total || done % self.progress_stride.max(1) == 0 {
                observer.on_progress(done, total);
            }
        }
    }

    /// Converts a raw face index into a point id.
    pub fn resolve(&self, raw: i64, row: usize) -> Result<usize> {
        resolve_index(raw, self.index_offset, CellKind::Polygon, row, self.point_count)
    }
}

/// Subtracts `offset` from `raw` and checks the result addresses a point.
pub(crate) fn resolve_index(
    raw: i64,
    offset: i64,
    kind: CellKind,
    row: usize,
    point_count: usize,
) -> Result<usize> {
    let out_of_range = |index| PolydataError::IndexOutOfRange {
        kind,
        row,
        index,
        point_count,
    };
    let index = raw.checked_sub(offset).ok_or_else(|| out_of_range(raw))?;
    usize::try_from(index)
        .ok()
        .filter(|&id| id < point_count)
        .ok_or_else(|| out_of_range(index))
}

/// Builds the polygon cells of a mesh from rows of raw face indices.
pub trait MeshBuildStrategy {
    /// Returns which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Builds polygon cells for `faces`.
    fn build_polys<F: AsRef<[i64]>>(
        &self,
        faces: &[F],
        ctx: &mut BuildContext<'_>,
    ) -> Result<CellArray>;
}

/// Writes a uniform table as one counted buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkStrategy;

impl MeshBuildStrategy for BulkStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bulk
    }

    fn build_polys<F: AsRef<[i64]>>(
        &self,
        faces: &[F],
        ctx: &mut BuildContext<'_>,
    ) -> Result<CellArray> {
        let k = uniform_row_len(faces).unwrap_or(0);
        let mut max_id = 0;
        for (row, face) in faces.iter().enumerate() {
            let face = face.as_ref();
            if face.len() != k {
                return Err(PolydataError::MalformedCells(format!(
                    "face {row} has {} indices, expected {k}",
                    face.len()
                )));
            }
            for &raw in face {
                max_id = max_id.max(ctx.resolve(raw, row)?);
            }
        }

        let buffer = match ctx.width {
            IndexWidth::Narrow => {
                if u32::try_from(max_id.max(k)).is_err() {
                    return Err(PolydataError::IndexOverflow {
                        index: max_id.max(k),
                        width: IndexWidth::Narrow,
                    });
                }
                IndexBuffer::Narrow(
                    faces
                        .iter()
                        .flat_map(|f| {
                            iter::once(k as u32).chain(f.as_ref().iter().map(|&i| i as u32))
                        })
                        .collect(),
                )
            }
            IndexWidth::Wide => IndexBuffer::Wide(
                faces
                    .iter()
                    .flat_map(|f| iter::once(k as u64).chain(f.as_ref().iter().map(|&i| i as u64)))
                    .collect(),
            ),
        };

        CellArray::from_legacy(faces.len(), buffer)
    }
}

/// Inserts faces one at a time, splitting four-index rows into triangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalStrategy;

impl MeshBuildStrategy for IncrementalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Incremental
    }

    fn build_polys<F: AsRef<[i64]>>(
        &self,
        faces: &[F],
        ctx: &mut BuildContext<'_>,
    ) -> Result<CellArray> {
        let total = faces.len();
        let mut cells = CellArray::with_capacity(ctx.width, total, 3);
        let mut ids: Vec<usize> = Vec::with_capacity(8);

        for (row, face) in faces.iter().enumerate() {
            ids.clear();
            for &raw in face.as_ref() {
                ids.push(ctx.resolve(raw, row)?);
            }

            if let [a, b, c, d] = ids[..] {
                // every triple of the four corners, in this order
                for tri in [[a, b, c], [a, b, d], [b, c, d], [c, d, a]] {
                    cells.insert_next_cell(&tri)?;
                }
            } else {
                cells.insert_next_cell(&ids)?;
            }

            ctx.report(row + 1, total);
        }

        Ok(cells)
    }
}
