//! Merge adjacent polygons into maximal boundary polygons.
//!
//! The triangulate-and-intersect pipeline leaves a patchwork of pieces
//! that share interior edges. An undirected edge index over all pieces
//! classifies each edge: owned by exactly one piece means boundary,
//! owned by more means interior seam. Walking the boundary edges
//! end-to-end reconstructs the merged outline(s).

use crate::error::{Error, Result};
use crate::geom::points_approx_eq;
use crate::shapes::{Polygon, Segment};
use crate::Point;

/// A unique vertex and the indices of the polygons that use it.
#[derive(Clone, Debug)]
pub struct VertexEntry {
    pub vertex: Point,
    pub polygons: Vec<usize>,
}

/// A unique undirected edge and the indices of the polygons that use it.
#[derive(Clone, Debug)]
pub struct EdgeEntry {
    pub edge: Segment,
    pub polygons: Vec<usize>,
}

/// Unique-vertex index across a set of polygons. `polygons[i][j]` is
/// the index entry for vertex `j` of polygon `i`.
pub struct VertexIndex {
    pub indices: Vec<VertexEntry>,
    pub polygons: Vec<Vec<usize>>,
}

/// Unique-edge index across a set of polygons; degenerate edges are
/// dropped, and a polygon left with fewer than 3 real edges contributes
/// nothing.
pub struct EdgeIndex {
    pub indices: Vec<EdgeEntry>,
    pub polygons: Vec<Vec<usize>>,
}

pub fn map_indices(polygons: &[Polygon]) -> VertexIndex {
    let mut entries: Vec<VertexEntry> = Vec::new();
    let mut per_polygon = Vec::with_capacity(polygons.len());

    for (i, pol) in polygons.iter().enumerate() {
        let mut slots = Vec::with_capacity(pol.vertices().len());
        for &vert in pol.vertices() {
            let idx = match entries
                .iter()
                .position(|e| points_approx_eq(e.vertex, vert))
            {
                Some(idx) => idx,
                None => {
                    entries.push(VertexEntry {
                        vertex: vert,
                        polygons: Vec::new(),
                    });
                    entries.len() - 1
                }
            };
            entries[idx].polygons.push(i);
            slots.push(idx);
        }
        per_polygon.push(slots);
    }

    VertexIndex {
        indices: entries,
        polygons: per_polygon,
    }
}

pub fn map_edges(polygons: &[Polygon]) -> EdgeIndex {
    let mut entries: Vec<EdgeEntry> = Vec::new();
    let mut per_polygon = Vec::with_capacity(polygons.len());

    for (i, pol) in polygons.iter().enumerate() {
        let mut slots = Vec::new();
        let edges: Vec<Segment> = pol
            .edges()
            .into_iter()
            .filter(|e| !points_approx_eq(e.p1, e.p2))
            .collect();
        if edges.len() >= 3 {
            for edge in edges {
                let idx = match entries
                    .iter()
                    .position(|e| e.edge.coincides_undirected(&edge))
                {
                    Some(idx) => idx,
                    None => {
                        entries.push(EdgeEntry {
                            edge,
                            polygons: Vec::new(),
                        });
                        entries.len() - 1
                    }
                };
                entries[idx].polygons.push(i);
                slots.push(idx);
            }
        }
        per_polygon.push(slots);
    }

    EdgeIndex {
        indices: entries,
        polygons: per_polygon,
    }
}

/// Merge a set of edge-adjacent polygons into their outline polygon(s).
///
/// A single polygon passes through unchanged. Walks start from an
/// arbitrary boundary edge normalized left-to-right; each step consumes
/// the boundary edge continuing at the walk's end until the loop
/// closes. Remaining boundary edges seed further outlines. A walk with
/// no continuation is a broken invariant and fails with
/// `Error::Reconstruction`.
pub fn merge(polygons: &[Polygon]) -> Result<Vec<Polygon>> {
    if polygons.len() == 1 {
        return Ok(vec![polygons[0].clone()]);
    }

    let map = map_edges(polygons);
    let mut edges: Vec<Segment> = map
        .indices
        .into_iter()
        .filter(|e| e.polygons.len() == 1)
        .map(|e| e.edge)
        .collect();

    let mut merged = Vec::new();

    let start = match edges.pop() {
        Some(s) => s.oriented_ltr(),
        None => return Ok(merged),
    };
    let mut end = start.p2;
    let mut verts = vec![start.p1, start.p2];

    while !edges.is_empty() {
        let idx = edges
            .iter()
            .position(|d| points_approx_eq(d.p1, end) || points_approx_eq(d.p2, end))
            .ok_or(Error::Reconstruction)?;
        let edge = edges.swap_remove(idx);
        let vertex = if points_approx_eq(edge.p1, end) {
            edge.p2
        } else {
            edge.p1
        };

        if points_approx_eq(vertex, verts[0]) {
            // Loop closed.
            let mut outline =
                Polygon::new(std::mem::take(&mut verts)).map_err(|_| Error::Reconstruction)?;
            outline.clean_mut();
            merged.push(outline);
            if edges.len() < 3 {
                break;
            }
            let start = match edges.pop() {
                Some(s) => s.oriented_ltr(),
                None => break,
            };
            end = start.p2;
            verts = vec![start.p1, start.p2];
        } else {
            verts.push(vertex);
            end = vertex;
        }
    }

    Ok(merged)
}
