//! Damped spring interpolation for the trailing cursor elements.
//!
//! Springs are integrated with semi-implicit Euler in fixed sub-steps so the
//! motion is stable regardless of the frame interval the browser delivers.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

/// Integration step in seconds.
const SUBSTEP_S: f64 = 1.0 / 240.0;
/// Longest frame interval simulated at once; longer gaps are clamped.
const MAX_FRAME_S: f64 = 1.0 / 15.0;
/// Position and velocity below which a spring counts as settled.
const REST_EPSILON: f64 = 0.01;

/// Physical spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Small dot that tracks the pointer tightly.
    pub const DOT: Self = Self { stiffness: 500.0, damping: 30.0, mass: 0.5 };
    /// Larger ring that trails behind the dot.
    pub const RING: Self = Self { stiffness: 200.0, damping: 25.0, mass: 0.8 };
}

/// 2D point in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One spring-driven point chasing a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    pub config: SpringConfig,
    pub position: Point,
    pub velocity: Point,
}

impl Spring2 {
    #[must_use]
    pub fn new(config: SpringConfig, position: Point) -> Self {
        Self { config, position, velocity: Point::default() }
    }

    /// Jump to `position` with zero velocity.
    pub fn snap(&mut self, position: Point) {
        self.position = position;
        self.velocity = Point::default();
    }

    #[must_use]
    pub fn is_settled(&self, target: Point) -> bool {
        self.position.distance(target) < REST_EPSILON && self.velocity.distance(Point::default()) < REST_EPSILON
    }

    /// Advance by `dt_s` seconds toward `target`.
    pub fn step(&mut self, target: Point, dt_s: f64) {
        let mut remaining = dt_s.clamp(0.0, MAX_FRAME_S);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_S);
            self.integrate(target, h);
            remaining -= h;
        }
        if self.is_settled(target) {
            self.snap(target);
        }
    }

    fn integrate(&mut self, target: Point, h: f64) {
        let SpringConfig { stiffness, damping, mass } = self.config;
        let ax = (-stiffness * (self.position.x - target.x) - damping * self.velocity.x) / mass;
        let ay = (-stiffness * (self.position.y - target.y) - damping * self.velocity.y) / mass;
        self.velocity.x += ax * h;
        self.velocity.y += ay * h;
        self.position.x += self.velocity.x * h;
        self.position.y += self.velocity.y * h;
    }
}

/// The dot and ring springs driven by the same pointer target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorMotion {
    pub dot: Spring2,
    pub ring: Spring2,
}

impl Default for CursorMotion {
    fn default() -> Self {
        let origin = Point::default();
        Self {
            dot: Spring2::new(SpringConfig::DOT, origin),
            ring: Spring2::new(SpringConfig::RING, origin),
        }
    }
}

impl CursorMotion {
    pub fn snap(&mut self, target: Point) {
        self.dot.snap(target);
        self.ring.snap(target);
    }

    /// Advance both springs. Returns `true` while either is still moving.
    pub fn step(&mut self, target: Point, dt_s: f64) -> bool {
        self.dot.step(target, dt_s);
        self.ring.step(target, dt_s);
        !self.is_settled(target)
    }

    #[must_use]
    pub fn is_settled(&self, target: Point) -> bool {
        self.dot.is_settled(target) && self.ring.is_settled(target)
    }
}
