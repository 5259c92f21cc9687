use std::f64::consts::PI;

use crate::geometry::{PitchExtent, PitchGeometry, PitchView, Point};

// StatsBomb pitch markings, in yards on a 120 x 80 pitch.
const SB_LENGTH: f64 = 120.0;
const SB_WIDTH: f64 = 80.0;
const PENALTY_AREA_DEPTH: f64 = 18.0;
const PENALTY_AREA_WIDTH: f64 = 44.0;
const SIX_YARD_DEPTH: f64 = 6.0;
const SIX_YARD_WIDTH: f64 = 20.0;
const PENALTY_SPOT: f64 = 12.0;
const CENTRE_CIRCLE_RADIUS: f64 = 10.0;
const GOAL_WIDTH: f64 = 8.0;
const GOAL_DEPTH: f64 = 2.0;
const ARC_SEGMENTS: usize = 48;

#[derive(Debug, Clone, PartialEq)]
pub enum Marking {
    Polyline(Vec<Point>),
    Spot(Point),
}

struct Scale {
    sx: f64,
    sy: f64,
    r: f64,
}

impl Scale {
    fn of(geometry: &PitchGeometry) -> Self {
        let sx = geometry.length_x / SB_LENGTH;
        let sy = geometry.width_y / SB_WIDTH;
        Self {
            sx,
            sy,
            r: sx.min(sy),
        }
    }
}

/// Pitch lines for the visible part of `view`, in pitch coordinates.
pub fn pitch_markings(view: &PitchView) -> Vec<Marking> {
    let g = view.geometry;
    let s = Scale::of(&g);
    let (len, wid) = (g.length_x, g.width_y);
    let mid_x = len / 2.0;
    let mid_y = wid / 2.0;

    let mut lines = vec![
        rect(0.0, 0.0, len, wid),
        vec![Point::new(mid_x, 0.0), Point::new(mid_x, wid)],
        arc(Point::new(mid_x, mid_y), CENTRE_CIRCLE_RADIUS * s.r, 0.0, 2.0 * PI),
    ];
    let mut spots = vec![Point::new(mid_x, mid_y)];

    for attacking_right in [false, true] {
        // Coordinates measured from the goal line of this end.
        let at = |depth: f64| if attacking_right { len - depth } else { depth };
        let pa_d = PENALTY_AREA_DEPTH * s.sx;
        let pa_w = PENALTY_AREA_WIDTH * s.sy;
        let six_d = SIX_YARD_DEPTH * s.sx;
        let six_w = SIX_YARD_WIDTH * s.sy;
        let goal_w = GOAL_WIDTH * s.sy;
        let goal_d = GOAL_DEPTH * s.sx;

        lines.push(box_from_line(at(0.0), at(pa_d), mid_y, pa_w));
        lines.push(box_from_line(at(0.0), at(six_d), mid_y, six_w));
        lines.push(box_from_line(at(0.0), at(-goal_d), mid_y, goal_w));

        let spot = Point::new(at(PENALTY_SPOT * s.sx), mid_y);
        spots.push(spot);
        lines.push(penalty_arc(spot, at(pa_d), CENTRE_CIRCLE_RADIUS * s.r, attacking_right));
    }

    let x_min = match view.extent {
        PitchExtent::Full => f64::NEG_INFINITY,
        PitchExtent::Half => mid_x,
    };
    let mut out: Vec<Marking> = lines
        .into_iter()
        .flat_map(|line| clip_polyline(&line, x_min))
        .filter(|line| line.len() >= 2)
        .map(Marking::Polyline)
        .collect();
    out.extend(
        spots
            .into_iter()
            .filter(|p| p.x >= x_min)
            .map(Marking::Spot),
    );
    out
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
        Point::new(x0, y0),
    ]
}

// Three-sided box standing on a goal line, open along the line itself.
fn box_from_line(line_x: f64, far_x: f64, mid_y: f64, width: f64) -> Vec<Point> {
    let top = mid_y - width / 2.0;
    let bottom = mid_y + width / 2.0;
    vec![
        Point::new(line_x, top),
        Point::new(far_x, top),
        Point::new(far_x, bottom),
        Point::new(line_x, bottom),
    ]
}

fn arc(center: Point, radius: f64, start: f64, end: f64) -> Vec<Point> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = start + (end - start) * (i as f64) / (ARC_SEGMENTS as f64);
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

// Part of the penalty-spot circle lying outside the penalty area.
fn penalty_arc(spot: Point, edge_x: f64, radius: f64, attacking_right: bool) -> Vec<Point> {
    let dx = (edge_x - spot.x).abs().min(radius);
    let half = (dx / radius).acos();
    if attacking_right {
        arc(spot, radius, PI - half, PI + half)
    } else {
        arc(spot, radius, -half, half)
    }
}

/// Splits a polyline into the runs lying at `x >= x_min`.
pub fn clip_polyline(points: &[Point], x_min: f64) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let a_in = a.x >= x_min;
        let b_in = b.x >= x_min;
        match (a_in, b_in) {
            (true, true) => {
                if current.is_empty() {
                    current.push(a);
                }
                current.push(b);
            }
            (true, false) => {
                if current.is_empty() {
                    current.push(a);
                }
                current.push(crossing(a, b, x_min));
                runs.push(std::mem::take(&mut current));
            }
            (false, true) => {
                current.push(crossing(a, b, x_min));
                current.push(b);
            }
            (false, false) => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    if runs.is_empty() && points.len() == 1 && points[0].x >= x_min {
        runs.push(points.to_vec());
    }
    runs
}

fn crossing(a: Point, b: Point, x: f64) -> Point {
    let t = (x - a.x) / (b.x - a.x);
    Point::new(x, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_runs_on_the_right_side() {
        let line = vec![
            Point::new(40.0, 0.0),
            Point::new(80.0, 0.0),
            Point::new(80.0, 10.0),
            Point::new(40.0, 10.0),
        ];
        let runs = clip_polyline(&line, 60.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].first(), Some(&Point::new(60.0, 0.0)));
        assert_eq!(runs[0].last(), Some(&Point::new(60.0, 10.0)));
    }

    #[test]
    fn clip_splits_when_leaving_and_reentering() {
        let line = vec![
            Point::new(70.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(70.0, 5.0),
        ];
        let runs = clip_polyline(&line, 60.0);
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn half_view_drops_far_end_markings() {
        let g = PitchGeometry::STATSBOMB;
        let full = pitch_markings(&PitchView::full(g));
        let half = pitch_markings(&PitchView::vertical_half(g));
        let spots = |m: &[Marking]| m.iter().filter(|m| matches!(m, Marking::Spot(_))).count();
        assert_eq!(spots(&full), 3);
        assert_eq!(spots(&half), 2);
        for marking in &half {
            if let Marking::Polyline(points) = marking {
                assert!(points.iter().all(|p| p.x >= 60.0 - 1e-9));
            }
        }
    }

    #[test]
    fn penalty_arc_stays_outside_the_box() {
        let spot = Point::new(12.0, 40.0);
        let pts = penalty_arc(spot, 18.0, 10.0, false);
        assert!(pts.iter().all(|p| p.x >= 18.0 - 1e-9));
    }
}
