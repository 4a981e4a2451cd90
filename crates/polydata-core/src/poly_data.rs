//! Poly data: a point set plus classified cells.

use std::fmt;

use glam::DVec3;

use crate::cell_array::CellArray;
use crate::error::{CellKind, PolydataError, Result};
use crate::index::IndexWidth;
use crate::precision::{precision, precision_seq};

/// An indexed mesh of vertex, line and polygon cells over one point set.
///
/// Poly data is immutable once built. Callers that need a different mesh
/// build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyData {
    points: Vec<DVec3>,
    verts: CellArray,
    lines: CellArray,
    polys: CellArray,
}

impl PolyData {
    /// Assembles poly data from points and cell arrays.
    ///
    /// Every cell id must address an existing point.
    pub fn new(
        points: Vec<DVec3>,
        verts: CellArray,
        lines: CellArray,
        polys: CellArray,
    ) -> Result<Self> {
        for (kind, cells) in [
            (CellKind::Vertex, &verts),
            (CellKind::Line, &lines),
            (CellKind::Polygon, &polys),
        ] {
            check_cells(kind, cells, points.len())?;
        }
        Ok(Self {
            points,
            verts,
            lines,
            polys,
        })
    }

    /// Creates poly data with no points and no cells.
    #[must_use]
    pub fn empty(width: IndexWidth) -> Self {
        Self {
            points: Vec::new(),
            verts: CellArray::new(width),
            lines: CellArray::new(width),
            polys: CellArray::new(width),
        }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the vertex cells.
    #[must_use]
    pub fn verts(&self) -> &CellArray {
        &self.verts
    }

    /// Returns the line cells.
    #[must_use]
    pub fn lines(&self) -> &CellArray {
        &self.lines
    }

    /// Returns the polygon cells.
    #[must_use]
    pub fn polys(&self) -> &CellArray {
        &self.polys
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of vertex cells.
    #[must_use]
    pub fn num_verts(&self) -> usize {
        self.verts.num_cells()
    }

    /// Returns the number of line cells.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        self.lines.num_cells()
    }

    /// Returns the number of polygon cells.
    #[must_use]
    pub fn num_polys(&self) -> usize {
        self.polys.num_cells()
    }

    /// Returns the total number of cells of all kinds.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.num_verts() + self.num_lines() + self.num_polys()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the axis-aligned bounding box, or `None` without points.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }

    /// Returns the length of the bounding box diagonal.
    #[must_use]
    pub fn diagonal_size(&self) -> f64 {
        self.bounds().map_or(0.0, |(lo, hi)| (hi - lo).length())
    }

    /// Returns the mean of all points.
    #[must_use]
    pub fn center_of_mass(&self) -> DVec3 {
        if self.points.is_empty() {
            return DVec3::ZERO;
        }
        self.points.iter().sum::<DVec3>() / self.points.len() as f64
    }

    /// Returns the point ids of every polygon cell.
    #[must_use]
    pub fn faces(&self) -> Vec<Vec<usize>> {
        self.polys.iter().collect()
    }

    /// Fan-triangulates the polygon cells.
    ///
    /// A polygon `[v0, v1, v2, v3, ..]` becomes `[v0, v1, v2], [v0, v2, v3], ..`.
    /// Cells with fewer than three ids contribute nothing.
    #[must_use]
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let mut tris = Vec::with_capacity(self.num_polys());
        for face in self.polys.iter() {
            if face.len() < 3 {
                continue;
            }
            let v0 = face[0];
            for i in 1..(face.len() - 1) {
                tris.push([v0, face[i], face[i + 1]]);
            }
        }
        tris
    }

    /// Returns the summed area of all polygon cells.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles()
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.points[a];
                (self.points[b] - v0).cross(self.points[c] - v0).length() * 0.5
            })
            .sum()
    }
}

fn check_cells(kind: CellKind, cells: &CellArray, point_count: usize) -> Result<()> {
    match cells.find_id_at_least(point_count) {
        Some((row, bad)) => Err(PolydataError::IndexOutOfRange {
            kind,
            row,
            index: bad as i64,
            point_count,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for PolyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PolyData")?;
        writeln!(f, "{:>15}: {}", "points", self.num_points())?;
        writeln!(f, "{:>15}: {}", "cells", self.num_cells())?;
        writeln!(f, "{:>15}: {}", "vertices", self.num_verts())?;
        writeln!(f, "{:>15}: {}", "lines", self.num_lines())?;
        write!(f, "{:>15}: {}", "polygons", self.num_polys())?;

        let Some((lo, hi)) = self.bounds() else {
            return Ok(());
        };
        let com = self.center_of_mass();
        write!(
            f,
            "\n{:>15}: {}",
            "center of mass",
            precision_seq(&com.to_array(), 3)
        )?;
        write!(
            f,
            "\n{:>15}: {}",
            "diagonal size",
            precision(self.diagonal_size(), 6)
        )?;
        let area = self.area();
        if area > 0.0 {
            write!(f, "\n{:>15}: {}", "area", precision(area, 6))?;
        }
        write!(
            f,
            "\n{:>15}: x=({}, {}) y=({}, {}) z=({}, {})",
            "bounds",
            precision(lo.x, 3),
            precision(hi.x, 3),
            precision(lo.y, 3),
            precision(hi.y, 3),
            precision(lo.z, 3),
            precision(hi.z, 3),
        )
    }
}
