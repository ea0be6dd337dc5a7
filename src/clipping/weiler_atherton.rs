// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use log::{debug, trace, warn};

use crate::{
    config::ClipConfig,
    geometry::{
        intersection::segment_segment_intersection,
        point::{Point2, PointOps},
        polygon::Polygon2,
        segment::SegmentOps,
        triangle::Triangle2,
        vector::VectorOps,
    },
    kernel::{are_equal, point_u_on_segment, signed_distance},
    numeric::scalar::Scalar,
};

/// A transversal crossing between an edge of A and an edge of B.
///
/// Edge `i` of a triangle runs from vertex `i` to vertex `(i + 1) % 3`; `ua`
/// and `ub` are the parameters along the two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T: Scalar> {
    pub point: Point2<T>,
    pub edge_a: usize,
    pub ua: T,
    pub edge_b: usize,
    pub ub: T,
    /// B's boundary enters A here.
    pub entering: bool,
}

/// Where a junction sits on one triangle's boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor<T: Scalar> {
    Vertex(usize),
    Edge(usize, T),
}

/// A point shared by both augmented lists: either a genuine crossing or a
/// degenerate contact (vertex on edge, vertex on vertex).
#[derive(Debug, Clone, Copy)]
struct Junction<T: Scalar> {
    point: Point2<T>,
    on_a: Anchor<T>,
    on_b: Anchor<T>,
    entering: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

impl<T: Scalar> Junction<T> {
    fn anchor(&self, side: Side) -> Anchor<T> {
        match side {
            Side::A => self.on_a,
            Side::B => self.on_b,
        }
    }

    fn is_crossing(&self) -> bool {
        self.entering.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct Node<T: Scalar> {
    point: Point2<T>,
    junction: Option<usize>,
}

/// A triangle's boundary with every junction spliced in, in walking order.
struct Ring<T: Scalar> {
    nodes: Vec<Node<T>>,
    slots: Vec<Option<usize>>,
}

impl<T: Scalar> Ring<T> {
    fn build(tri: &Triangle2<T>, junctions: &[Junction<T>], side: Side) -> Self {
        let mut nodes = Vec::with_capacity(3 + junctions.len());
        for (i, vertex) in tri.vertices.iter().enumerate() {
            let at_vertex = junctions
                .iter()
                .position(|j| j.anchor(side) == Anchor::Vertex(i));
            nodes.push(Node {
                point: *vertex,
                junction: at_vertex,
            });

            // at most a couple per edge
            let mut on_edge: Vec<(T, usize)> = Vec::new();
            for (id, j) in junctions.iter().enumerate() {
                if let Anchor::Edge(edge, t) = j.anchor(side) {
                    if edge == i {
                        let at = on_edge.iter().position(|(u, _)| *u > t).unwrap_or(on_edge.len());
                        on_edge.insert(at, (t, id));
                    }
                }
            }
            nodes.extend(on_edge.into_iter().map(|(_, id)| Node {
                point: junctions[id].point,
                junction: Some(id),
            }));
        }

        let mut slots = vec![None; junctions.len()];
        for (pos, node) in nodes.iter().enumerate() {
            if let Some(id) = node.junction {
                slots[id].get_or_insert(pos);
            }
        }
        Ring { nodes, slots }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn next(&self, pos: usize) -> usize {
        (pos + 1) % self.nodes.len()
    }
}

/// Genuine crossings between the edges of two counter-clockwise triangles.
///
/// Hits that coincide with an endpoint of either edge are not crossings.
/// Edge pairs are visited A-major, so the result is ordered by A's edge index
/// and then by B's.
pub fn find_crossings<T: Scalar>(
    a: &Triangle2<T>,
    b: &Triangle2<T>,
    config: &ClipConfig<T>,
) -> Vec<Crossing<T>> {
    let mut crossings = Vec::new();
    for (edge_a, ea) in a.edges().iter().enumerate() {
        for (edge_b, eb) in b.edges().iter().enumerate() {
            let Some(hit) = segment_segment_intersection(ea, eb) else {
                continue;
            };
            if [ea.a, ea.b, eb.a, eb.b]
                .iter()
                .any(|end| are_equal(end, &hit.point))
            {
                trace!("edge pair ({edge_a}, {edge_b}) meets at an endpoint {:?}", hit.point.coords);
                continue;
            }

            let nudge = eb.direction().scale(config.entry_epsilon);
            let entering = a.contains(&hit.point.add_vector(&nudge));
            trace!(
                "crossing {:?} on edges ({edge_a}, {edge_b}), entering: {entering}",
                hit.point.coords
            );
            crossings.push(Crossing {
                point: hit.point,
                edge_a,
                ua: hit.ua,
                edge_b,
                ub: hit.ub,
                entering,
            });
        }
    }
    crossings
}

/// Vertex contacts that are not crossings.
fn touch_junctions<T: Scalar>(a: &Triangle2<T>, b: &Triangle2<T>) -> Vec<Junction<T>> {
    let mut touches = Vec::new();
    for (i, pa) in a.vertices.iter().enumerate() {
        for (j, pb) in b.vertices.iter().enumerate() {
            if are_equal(pa, pb) {
                touches.push(Junction {
                    point: *pa,
                    on_a: Anchor::Vertex(i),
                    on_b: Anchor::Vertex(j),
                    entering: None,
                });
            }
        }
    }

    let mut vertex_on_edge = |vertex_side: Side, vertices: &Triangle2<T>, edges: &Triangle2<T>| {
        for (i, p) in vertices.vertices.iter().enumerate() {
            let taken = touches.iter().any(|j: &Junction<T>| j.anchor(vertex_side) == Anchor::Vertex(i));
            if taken {
                continue;
            }
            for (k, edge) in edges.edges().iter().enumerate() {
                if are_equal(&edge.a, p) || are_equal(&edge.b, p) {
                    continue;
                }
                let Some(t) = point_u_on_segment(&edge.a, &edge.b, p) else {
                    continue;
                };
                let (on_a, on_b) = match vertex_side {
                    Side::A => (Anchor::Vertex(i), Anchor::Edge(k, t)),
                    Side::B => (Anchor::Edge(k, t), Anchor::Vertex(i)),
                };
                touches.push(Junction {
                    point: *p,
                    on_a,
                    on_b,
                    entering: None,
                });
                break;
            }
        }
    };
    vertex_on_edge(Side::A, a, b);
    vertex_on_edge(Side::B, b, a);
    touches
}

/// Overlap of two triangles when their boundaries never cross.
fn containment<T: Scalar>(a: &Triangle2<T>, b: &Triangle2<T>) -> Polygon2<T> {
    if a.vertices.iter().all(|p| b.contains(p)) {
        return Polygon2::new(a.vertices.to_vec());
    }
    if b.vertices.iter().all(|p| a.contains(p)) {
        return Polygon2::new(b.vertices.to_vec());
    }
    Polygon2::empty()
}

/// Overlap of two triangles whose boundaries meet only at vertices.
///
/// With no transversal crossing every corner of the overlap is a vertex of one
/// triangle lying in the other, so the overlap is the convex hull of those
/// vertices.
fn touching_overlap<T: Scalar>(
    a: &Triangle2<T>,
    b: &Triangle2<T>,
    config: &ClipConfig<T>,
) -> Polygon2<T> {
    let mut corners: Vec<Point2<T>> = Vec::with_capacity(6);
    let inside = a
        .vertices
        .iter()
        .filter(|p| b.contains(p))
        .chain(b.vertices.iter().filter(|p| a.contains(p)));
    for p in inside {
        if !corners.iter().any(|q| are_equal(q, p)) {
            corners.push(*p);
        }
    }
    if corners.len() < 3 {
        return Polygon2::empty();
    }

    let count = T::from_num_den(corners.len() as i32, 1);
    let (sx, sy) = corners
        .iter()
        .fold((T::zero(), T::zero()), |(x, y), p| (x + p.x(), y + p.y()));
    let (cx, cy) = (sx / count, sy / count);
    let angle = |p: &Point2<T>| (p.y() - cy).atan2(p.x() - cx);
    corners.sort_by(|p, q| angle(p).partial_cmp(&angle(q)).unwrap_or(Ordering::Equal));

    // drop corners lying on the segment between their neighbours
    let mut i = 0;
    while corners.len() >= 3 && i < corners.len() {
        let n = corners.len();
        let (prev, next) = (corners[(i + n - 1) % n], corners[(i + 1) % n]);
        if signed_distance(&prev, &next, &corners[i]).approx_eq(T::zero()) {
            corners.remove(i);
        } else {
            i += 1;
        }
    }

    let overlap = Polygon2::new(corners);
    if overlap.len() < 3 || overlap.signed_area() + overlap.signed_area() <= config.area_epsilon {
        trace!("boundaries touch without sharing area");
        return Polygon2::empty();
    }
    overlap
}

/// Drops consecutive repeats, including a closing repeat of the first point.
fn merge_duplicates<T: Scalar>(points: Vec<Point2<T>>) -> Polygon2<T> {
    let mut merged: Vec<Point2<T>> = Vec::with_capacity(points.len());
    for p in points {
        if merged.last().is_some_and(|q| are_equal(q, &p)) {
            continue;
        }
        merged.push(p);
    }
    while merged.len() > 1 && are_equal(&merged[0], &merged[merged.len() - 1]) {
        merged.pop();
    }
    if merged.len() < 3 {
        return Polygon2::empty();
    }
    Polygon2::new(merged)
}

/// Clips triangle `a` against triangle `b` in the plane.
///
/// The walk starts at the first crossing where B enters A and follows B, or
/// follows A from the first crossing when none enters. At every junction it
/// keeps to the current boundary while that boundary's next stretch stays
/// inside the other triangle, and switches otherwise. Without crossings the
/// overlap is either one triangle nested in the other or the hull of the
/// vertices where the boundaries touch.
///
/// Returns the convex overlap polygon in counter-clockwise order, or an empty
/// polygon when the triangles share no area (disjoint, touching at a vertex,
/// or along an edge) or either one is degenerate. Input winding does not
/// matter.
pub fn clip_triangles<T: Scalar>(
    a: &Triangle2<T>,
    b: &Triangle2<T>,
    config: &ClipConfig<T>,
) -> Polygon2<T> {
    if a.is_degenerate(config.area_epsilon) || b.is_degenerate(config.area_epsilon) {
        debug!("degenerate triangle, nothing to clip");
        return Polygon2::empty();
    }
    let a = a.to_ccw();
    let b = b.to_ccw();

    let crossings = find_crossings(&a, &b, config);
    if crossings.is_empty() {
        let nested = containment(&a, &b);
        if !nested.is_empty() {
            return nested;
        }
        return touching_overlap(&a, &b, config);
    }

    let mut junctions: Vec<Junction<T>> = crossings
        .iter()
        .map(|c| Junction {
            point: c.point,
            on_a: Anchor::Edge(c.edge_a, c.ua),
            on_b: Anchor::Edge(c.edge_b, c.ub),
            entering: Some(c.entering),
        })
        .collect();
    junctions.extend(touch_junctions(&a, &b));

    let ring_a = Ring::build(&a, &junctions, Side::A);
    let ring_b = Ring::build(&b, &junctions, Side::B);

    let (start, side) = match junctions.iter().position(|j| j.entering == Some(true)) {
        Some(id) => (id, Side::B),
        None => (0, Side::A),
    };
    walk(&a, &b, &ring_a, &ring_b, &junctions, start, side)
}

/// Clips with the default [`ClipConfig`].
pub fn weiler_atherton<T: Scalar>(a: &Triangle2<T>, b: &Triangle2<T>) -> Polygon2<T> {
    clip_triangles(a, b, &ClipConfig::default())
}

fn walk<T: Scalar>(
    a: &Triangle2<T>,
    b: &Triangle2<T>,
    ring_a: &Ring<T>,
    ring_b: &Ring<T>,
    junctions: &[Junction<T>],
    start: usize,
    mut side: Side,
) -> Polygon2<T> {
    let ring_of = |side: Side| match side {
        Side::A => ring_a,
        Side::B => ring_b,
    };
    let other_of = |side: Side| match side {
        Side::A => (Side::B, b),
        Side::B => (Side::A, a),
    };

    let Some(mut pos) = ring_of(side).slots[start] else {
        warn!("start junction missing from its ring");
        return Polygon2::empty();
    };
    let mut out = vec![junctions[start].point];
    let limit = ring_a.len() + ring_b.len() + 1;

    for _ in 0..limit {
        let ring = ring_of(side);
        if let Some(id) = ring.nodes[pos].junction {
            let here = ring.nodes[pos].point;
            let ahead = ring.nodes[ring.next(pos)].point;
            let (other_side, other_tri) = other_of(side);
            if !other_tri.contains(&here.midpoint(&ahead)) {
                let Some(other_pos) = ring_of(other_side).slots[id] else {
                    warn!("junction {id} missing from the other ring");
                    return Polygon2::empty();
                };
                if junctions[id].is_crossing() {
                    trace!("switching to {other_side:?} at {:?}", here.coords);
                } else {
                    trace!("switching to {other_side:?} at touch {:?}", here.coords);
                }
                side = other_side;
                pos = other_pos;
            }
        }

        let ring = ring_of(side);
        pos = ring.next(pos);
        let node = ring.nodes[pos];
        if node.junction == Some(start) {
            return merge_duplicates(out);
        }
        out.push(node.point);
    }

    warn!(
        "clip walk did not close after {limit} steps; {} junctions",
        junctions.len()
    );
    Polygon2::empty()
}
