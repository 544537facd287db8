//! Proximity connection graphs between particles.
//!
//! Network-style backdrops draw lines between particles that are close
//! together. The graph is recomputed every frame from display positions,
//! so it needs no state of its own.

/// A line between two particles, by index into the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// Strength in `(0, 1]`, strictly decreasing with distance.
    pub weight: f32,
}

/// How a field's particles are linked each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkStrategy {
    /// No connections.
    None,
    /// Every pair closer than `max_distance` is linked.
    AllPairs { max_distance: f32 },
    /// Each particle links to at most `max_per_node` neighbors within
    /// `(min_distance, max_distance)`, nearest first.
    Nearest {
        max_distance: f32,
        min_distance: f32,
        max_per_node: usize,
    },
}

/// Compute the connection set for one frame.
///
/// `points` are display positions, indexed the same as the field's
/// particles. A non-positive `max_distance` yields an empty graph.
pub fn compute_connections(points: &[(f32, f32)], strategy: LinkStrategy) -> Vec<Connection> {
    match strategy {
        LinkStrategy::None => Vec::new(),
        LinkStrategy::AllPairs { max_distance } => all_pairs(points, max_distance),
        LinkStrategy::Nearest {
            max_distance,
            min_distance,
            max_per_node,
        } => nearest(points, max_distance, min_distance, max_per_node),
    }
}

fn all_pairs(points: &[(f32, f32)], max_distance: f32) -> Vec<Connection> {
    if max_distance <= 0.0 {
        return Vec::new();
    }
    let mut links = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = dist(points[i], points[j]);
            if d < max_distance {
                links.push(Connection {
                    a: i,
                    b: j,
                    distance: d,
                    weight: 1.0 - d / max_distance,
                });
            }
        }
    }
    links
}

fn nearest(
    points: &[(f32, f32)],
    max_distance: f32,
    min_distance: f32,
    max_per_node: usize,
) -> Vec<Connection> {
    if max_distance <= 0.0 || max_per_node == 0 {
        return Vec::new();
    }
    let mut links = Vec::new();
    for i in 0..points.len() {
        let mut candidates: Vec<(usize, f32)> = points
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, &p)| (j, dist(points[i], p)))
            .filter(|&(_, d)| d > min_distance && d < max_distance)
            .collect();
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(max_per_node);
        for (j, d) in candidates {
            links.push(Connection {
                a: i,
                b: j,
                distance: d,
                weight: 1.0 - d / max_distance,
            });
        }
    }
    links
}

fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
