use crate::models::{BuildGoal, Point, Template};

const PERIMETER_TOLERANCE: f64 = 0.1;
const OFFSET_TOLERANCE: f64 = 0.2;

/// Derived quantities reported to the session after every board change.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub perimeter: f64,
    pub area: f64,
    pub rotation: i32,
    pub offset: Point,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub success: bool,
    pub metrics: Metrics,
}

/// Transient interaction state of one discovery board. Owned by the question
/// view for as long as the question is displayed; reset on retry.
#[derive(Debug, Clone)]
pub struct Board {
    grid_size: i32,
    initial_points: Vec<Point>,
    points: Vec<Point>,
    rotation: i32,
    offset: Point,
    interacted: bool,
}

impl Board {
    pub fn new(template: &Template) -> Self {
        let initial_points = template.initial_points();
        Self {
            grid_size: template.grid_size(),
            points: initial_points.clone(),
            initial_points,
            rotation: 0,
            offset: Point::new(0, 0),
            interacted: false,
        }
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn interacted(&self) -> bool {
        self.interacted
    }

    pub fn has_point(&self, x: i32, y: i32) -> bool {
        self.points.iter().any(|p| p.x == x && p.y == y)
    }

    /// Toggle a grid cell: remove it if present, append it otherwise.
    pub fn toggle_point(&mut self, x: i32, y: i32) {
        self.interacted = true;
        if let Some(idx) = self.points.iter().position(|p| p.x == x && p.y == y) {
            self.points.remove(idx);
        } else {
            self.points.push(Point::new(x, y));
        }
    }

    /// Turn by a fixed increment (degrees). The raw value accumulates; only
    /// comparisons wrap mod 360.
    pub fn rotate(&mut self, degrees: i32) {
        self.interacted = true;
        self.rotation += degrees;
    }

    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.interacted = true;
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Marks the board as touched without changing anything, as a measuring
    /// gesture does.
    pub fn touch(&mut self) {
        self.interacted = true;
    }

    pub fn reset(&mut self) {
        self.points = self.initial_points.clone();
        self.rotation = 0;
        self.offset = Point::new(0, 0);
        self.interacted = false;
    }

    /// Sum of Euclidean edge lengths, treating the point list as a closed
    /// polygon in insertion order. Fewer than two points have no boundary.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            let dx = (b.x - a.x) as f64;
            let dy = (b.y - a.y) as f64;
            total += (dx * dx + dy * dy).sqrt();
        }
        total
    }

    /// Shoelace area over the insertion-ordered vertex list. Assumes a simple
    /// polygon; self-intersecting input yields a well-defined but possibly
    /// unintended value.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            twice += (a.x as f64) * (b.y as f64) - (b.x as f64) * (a.y as f64);
        }
        (twice / 2.0).abs()
    }

    /// Judge the board against its template. Pure with respect to shared
    /// state; the caller forwards the report to the session.
    pub fn evaluate(&self, template: &Template) -> Report {
        let success = match template {
            Template::Rotate { target_rotation } => {
                self.rotation.rem_euclid(360) == target_rotation.rem_euclid(360)
            }
            Template::Mirror {
                grid_size,
                source_points,
            } => self.mirror_matches(*grid_size, source_points),
            Template::Build { goal, .. } => match goal {
                BuildGoal::Area(target) => self.area() == *target,
                BuildGoal::Perimeter(target) => {
                    (self.perimeter() - target).abs() < PERIMETER_TOLERANCE
                }
                BuildGoal::Points(target) => self.points.len() == *target,
            },
            Template::Match { target_offset, .. } => {
                let dx = ((self.offset.x - target_offset.x) as f64).abs();
                let dy = ((self.offset.y - target_offset.y) as f64).abs();
                dx < OFFSET_TOLERANCE && dy < OFFSET_TOLERANCE
            }
            // Correctness for measure boards lives in the option check.
            Template::Measure { .. } => self.interacted,
        };

        Report {
            success,
            metrics: Metrics {
                perimeter: self.perimeter(),
                area: self.area(),
                rotation: self.rotation,
                offset: self.offset,
                points: self.points.clone(),
            },
        }
    }

    /// The expected set is the source reflected across the vertical midline:
    /// x -> grid_size - 1 - x. Order independent; toggling keeps the user
    /// list duplicate-free, so cardinality plus containment is set equality.
    fn mirror_matches(&self, grid_size: i32, source_points: &[Point]) -> bool {
        if self.points.len() != source_points.len() {
            return false;
        }
        source_points.iter().all(|p| {
            let expected = Point::new(grid_size - 1 - p.x, p.y);
            self.points.contains(&expected)
        })
    }
}
