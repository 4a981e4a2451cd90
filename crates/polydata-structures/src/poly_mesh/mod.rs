//! Building poly data from raw point and index tables.
//!
//! [`PolyMeshBuilder`] turns a table of 1D, 2D or 3D coordinates plus
//! optional face rows and an optional line sequence into [`PolyData`]:
//!
//! - without faces, every point gets its own vertex cell;
//! - uniform face tables with zero-based indices are written in one bulk
//!   pass ([`BulkStrategy`]);
//! - everything else is inserted face by face ([`IncrementalStrategy`]),
//!   where four-index rows become four triangles.
//!
//! Inputs are only read. Index offsets are applied to local copies.

mod lines;
mod points;
pub mod strategy;

pub use strategy::{
    select_strategy, uniform_row_len, BuildContext, BulkStrategy, IncrementalStrategy,
    MeshBuildStrategy, StrategyKind,
};

use polydata_core::error::Result;
use polydata_core::options::Options;
use polydata_core::progress::{ProgressBar, ProgressObserver};
use polydata_core::{CellArray, PolyData};

use lines::build_lines;
use points::normalize_points;

/// Configures and runs a poly data build.
///
/// ```
/// use polydata_structures::poly_mesh::PolyMeshBuilder;
///
/// let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// let mesh = PolyMeshBuilder::new().build(&points, &[[0i64, 1, 2]]).unwrap();
/// assert_eq!(mesh.num_polys(), 1);
/// ```
#[derive(Default)]
pub struct PolyMeshBuilder<'a> {
    options: Options,
    index_offset: i64,
    lines: Option<&'a [i64]>,
    progress: Option<&'a mut dyn ProgressObserver>,
}

impl<'a> PolyMeshBuilder<'a> {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Sets the value subtracted from every face index (1 for one-based input).
    pub fn index_offset(mut self, offset: i64) -> Self {
        self.index_offset = offset;
        self
    }

    /// Adds a line sequence.
    ///
    /// Segments join consecutive indices starting from the second element,
    /// so `[l0, l1, l2, l3]` yields `(l1, l2), (l2, l3)`. Line indices are
    /// zero-based and ignore the index offset.
    pub fn lines(mut self, lines: &'a [i64]) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Sets the observer notified during long incremental builds.
    pub fn progress(mut self, observer: &'a mut dyn ProgressObserver) -> Self {
        self.progress = Some(observer);
        self
    }

    /// Returns the build options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds a point cloud: one vertex cell per point, plus any lines.
    pub fn build_points<P: AsRef<[f64]>>(self, points: &[P]) -> Result<PolyData> {
        self.build_inner::<P, [i64; 0]>(points, None)
    }

    /// Builds a surface from points and face rows, plus any lines.
    pub fn build<P, F>(self, points: &[P], faces: &[F]) -> Result<PolyData>
    where
        P: AsRef<[f64]>,
        F: AsRef<[i64]>,
    {
        self.build_inner(points, Some(faces))
    }

    /// Builds with optional faces.
    pub fn build_optional<P, F>(self, points: &[P], faces: Option<&[F]>) -> Result<PolyData>
    where
        P: AsRef<[f64]>,
        F: AsRef<[i64]>,
    {
        self.build_inner(points, faces)
    }

    fn build_inner<P, F>(self, points: &[P], faces: Option<&[F]>) -> Result<PolyData>
    where
        P: AsRef<[f64]>,
        F: AsRef<[i64]>,
    {
        let points = normalize_points(points)?;
        let point_count = points.len();
        let width = self.options.index_width;
        if point_count == 0 {
            log::warn!("building poly data from an empty point set");
        }

        let lines = match self.lines {
            Some(seq) => build_lines(seq, point_count, width)?,
            None => CellArray::new(width),
        };

        let Some(faces) = faces else {
            let mut verts = CellArray::with_capacity(width, point_count, 1);
            for id in 0..point_count {
                verts.insert_next_cell(&[id])?;
            }
            log::debug!(
                "built {} vertex cells and {} line cells",
                verts.num_cells(),
                lines.num_cells()
            );
            return PolyData::new(points, verts, lines, CellArray::new(width));
        };

        let kind = select_strategy(&self.options, self.index_offset, faces);
        let report =
            kind == StrategyKind::Incremental && faces.len() > self.options.progress_threshold;

        let mut fallback = None;
        let progress: Option<&mut dyn ProgressObserver> = match self.progress {
            Some(observer) if report => Some(observer),
            None if report && self.options.log_progress => {
                let bar = fallback.insert(log_bar(faces.len()));
                Some(bar as &mut dyn ProgressObserver)
            }
            _ => None,
        };

        let mut ctx = BuildContext {
            point_count,
            index_offset: self.index_offset,
            width,
            progress,
            progress_stride: self.options.progress_stride,
        };
        let polys = match kind {
            StrategyKind::Bulk => run_strategy(&BulkStrategy, faces, &mut ctx)?,
            StrategyKind::Incremental => run_strategy(&IncrementalStrategy, faces, &mut ctx)?,
        };

        PolyData::new(points, CellArray::new(width), lines, polys)
    }
}

/// The bar used when progress is logged without an observer.
fn log_bar(total: usize) -> ProgressBar {
    ProgressBar::new(0, total, 1).with_eta(false)
}

fn run_strategy<S, F>(strategy: &S, faces: &[F], ctx: &mut BuildContext<'_>) -> Result<CellArray>
where
    S: MeshBuildStrategy,
    F: AsRef<[i64]>,
{
    let polys = strategy.build_polys(faces, ctx)?;
    log::debug!(
        "built {} polygon cells from {} faces ({:?} strategy, {} index words)",
        polys.num_cells(),
        faces.len(),
        strategy.kind(),
        ctx.width
    );
    Ok(polys)
}

/// Builds poly data with default options.
///
/// `faces` of `None` yields one vertex cell per point. `index_offset` is
/// subtracted from every face index, never from line indices.
pub fn build_poly_data<P, F>(
    points: &[P],
    faces: Option<&[F]>,
    lines: Option<&[i64]>,
    index_offset: i64,
) -> Result<PolyData>
where
    P: AsRef<[f64]>,
    F: AsRef<[i64]>,
{
    let mut builder = PolyMeshBuilder::new().index_offset(index_offset);
    if let Some(seq) = lines {
        builder = builder.lines(seq);
    }
    builder.build_optional(points, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use polydata_core::error::PolydataError;
    use polydata_core::index::IndexWidth;

    fn unit_square() -> Vec<[f64; 3]> {
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_vertices_only() {
        let mesh = PolyMeshBuilder::new()
            .build_points(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0]])
            .unwrap();
        assert_eq!(mesh.num_verts(), 3);
        assert_eq!(mesh.num_polys(), 0);
        assert_eq!(mesh.verts().cell(2), Some(vec![2]));
        assert!(mesh.points().iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_quad_becomes_four_triangles() {
        let mesh = PolyMeshBuilder::new()
            .build(&unit_square(), &[[0i64, 1, 2, 3]])
            .unwrap();
        assert_eq!(mesh.num_polys(), 4);
        assert_eq!(
            mesh.faces(),
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 2, 3], vec![2, 3, 0]]
        );
    }

    #[test]
    fn test_lines_with_faces() {
        let mesh = PolyMeshBuilder::new()
            .lines(&[9, 0, 1, 2])
            .build(&unit_square(), &[[0i64, 1, 2]])
            .unwrap();
        assert_eq!(mesh.num_lines(), 2);
        assert_eq!(mesh.num_polys(), 1);
        assert_eq!(mesh.num_verts(), 0);
    }

    #[test]
    fn test_one_based_faces() {
        let mesh = PolyMeshBuilder::new()
            .index_offset(1)
            .build(&unit_square(), &[[1i64, 2, 3], [1, 3, 4]])
            .unwrap();
        assert_eq!(mesh.faces(), vec![vec![0, 1, 2], vec![0, 2, 3]]);
    }

    #[test]
    fn test_empty_points() {
        let points: Vec<[f64; 3]> = Vec::new();
        let mesh = PolyMeshBuilder::new().build_points(&points).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_cells(), 0);
    }

    #[test]
    fn test_out_of_range_face() {
        let err = PolyMeshBuilder::new()
            .build(&unit_square(), &[vec![0i64, 1, 2], vec![0, 4, 5]])
            .unwrap_err();
        assert!(matches!(err, PolydataError::IndexOutOfRange { row: 1, index: 4, .. }));
    }

    #[test]
    fn test_narrow_width() {
        let options = Options::default().with_index_width(IndexWidth::Narrow);
        let mesh = PolyMeshBuilder::with_options(options)
            .build(&unit_square(), &[[0i64, 1, 2], [0, 2, 3]])
            .unwrap();
        assert_eq!(mesh.polys().width(), IndexWidth::Narrow);
        assert_eq!(mesh.verts().width(), IndexWidth::Narrow);
    }

    #[test]
    fn test_progress_only_above_threshold() {
        let points: Vec<[f64; 3]> = (0..3).map(|i| [f64::from(i), 0.0, 0.0]).collect();
        let faces: Vec<Vec<i64>> = (0..12).map(|_| vec![0, 1, 2, 0, 1]).collect();
        let mut calls = Vec::new();
        let mut observer = |done: usize, total: usize| calls.push((done, total));
        let options = Options::default()
            .with_fast_path(false)
            .with_progress_threshold(10);
        PolyMeshBuilder::with_options(Options {
            progress_stride: 5,
            ..options
        })
        .progress(&mut observer)
        .build(&points, &faces)
        .unwrap();
        assert_eq!(calls, vec![(5, 12), (10, 12), (12, 12)]);

        let mut quiet = Vec::new();
        let mut observer = |done: usize, total: usize| quiet.push((done, total));
        PolyMeshBuilder::new()
            .progress(&mut observer)
            .build(&points, &faces[..2])
            .unwrap();
        assert!(quiet.is_empty());
    }

    #[test]
    fn test_logged_progress_without_observer() {
        let points: Vec<[f64; 3]> = (0..4).map(|i| [f64::from(i), 0.0, 0.0]).collect();
        let faces: Vec<Vec<i64>> = (0..9).map(|_| vec![0, 1, 2, 3]).collect();
        let options = Options {
            log_progress: true,
            progress_stride: 2,
            ..Options::default().with_progress_threshold(1)
        };
        let mesh = PolyMeshBuilder::with_options(options)
            .build(&points, &faces)
            .unwrap();
        assert_eq!(mesh.num_polys(), 36);
    }

    #[test]
    fn test_log_bar_reaches_full_without_eta() {
        let mut bar = log_bar(9);
        assert_eq!(bar.set(4, "faces"), Some(format!("{} faces", bar.bar())));
        for done in [6, 8, 9] {
            bar.on_progress(done, 9);
        }
        assert_eq!(bar.percent(), 100);
        assert_eq!(bar.counts(), 9);
        assert!(!bar.bar().contains('%'));
    }

    #[test]
    fn test_build_poly_data_function() {
        let pts: Vec<[f64; 3]> = (0..5).map(|i| [f64::from(i), 0.0, 0.0]).collect();
        let lines = [5i64, 0, 1, 2, 3];
        let mesh = build_poly_data::<_, [i64; 3]>(&pts, None, Some(&lines[..]), 0).unwrap();
        assert_eq!(
            mesh.lines().iter().collect::<Vec<_>>(),
            vec![vec![0, 1], vec![1, 2], vec![2, 3]]
        );
        assert_eq!(mesh.num_verts(), 5);
        assert_eq!(mesh.points()[4], DVec3::new(4.0, 0.0, 0.0));
    }
}
