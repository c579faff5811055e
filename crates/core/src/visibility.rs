//! Field-of-view over the camera window.
//! Each recompute snapshots transparency for the window (plus one cell of
//! padding), runs the configured shadowcasting variant from the player's
//! window-local position and writes `visible`/`explored` back for window cells
//! only, so cost tracks the window area and never the map area.

use tracing::debug;

use crate::camera::Camera;
use crate::config::{FovAlgorithm, FovConfig};
use crate::types::{Pos, Rect};
use crate::world::World;

/// Boolean transparency grid in window-local coordinates. Cells outside the
/// grid are opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransparencyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl TransparencyGrid {
    /// Snapshot `area` of the world; parts of `area` beyond the map are opaque.
    pub fn snapshot(world: &World, area: Rect) -> Self {
        let cells = area
            .cells()
            .map(|pos| world.map.in_bounds(pos) && world.is_transparent(pos))
            .collect();
        Self { width: area.width, height: area.height, cells }
    }

    /// Rows of `#` (opaque) and anything else (transparent).
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        let cells = rows.iter().flat_map(|row| row.chars().map(|ch| ch != '#')).collect();
        Self { width, height, cells }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn is_transparent(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[(pos.y * self.width + pos.x) as usize]
    }
}

/// Lit cells produced by one FOV pass, same shape as the input grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FovMask {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl FovMask {
    fn new(width: i32, height: i32) -> Self {
        Self { width, height, cells: vec![false; (width * height) as usize] }
    }

    fn light(&mut self, pos: Pos) {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            self.cells[(pos.y * self.width + pos.x) as usize] = true;
        }
    }

    pub fn is_lit(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x < self.width
            && pos.y < self.height
            && self.cells[(pos.y * self.width + pos.x) as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }
}

fn within_radius(origin: Pos, p: Pos, radius: i32) -> bool {
    let dx = i64::from(p.x - origin.x);
    let dy = i64::from(p.y - origin.y);
    let radius = i64::from(radius);
    dx * dx + dy * dy <= radius * radius
}

pub fn compute_fov(
    grid: &TransparencyGrid,
    origin: Pos,
    radius: i32,
    algorithm: FovAlgorithm,
) -> FovMask {
    assert!(grid.in_bounds(origin), "FOV origin {origin} lies outside the transparency grid");
    let mut lit = FovMask::new(grid.width, grid.height);
    lit.light(origin);
    match algorithm {
        FovAlgorithm::Symmetric => {
            for quadrant in Quadrant::ALL {
                scan_quadrant(grid, &mut lit, origin, radius, quadrant);
            }
        }
        FovAlgorithm::Shadowcast => {
            for oct in 0..8 {
                OctantScan { grid, lit: &mut lit, orig: origin, range: radius, oct }.scan(
                    1,
                    Slope::new(1, 1),
                    Slope::new(0, 1),
                );
            }
        }
    }
    lit
}

// Symmetric shadowcasting: rows of increasing depth per quadrant, a floor cell
// is lit only when its centre lies inside the visible slope range.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [Quadrant::North, Quadrant::East, Quadrant::South, Quadrant::West];

    fn transform(self, origin: Pos, depth: i32, col: i32) -> Pos {
        match self {
            Quadrant::North => Pos { x: origin.x + col, y: origin.y - depth },
            Quadrant::South => Pos { x: origin.x + col, y: origin.y + depth },
            Quadrant::East => Pos { x: origin.x + depth, y: origin.y + col },
            Quadrant::West => Pos { x: origin.x - depth, y: origin.y + col },
        }
    }
}

/// `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fraction {
    num: i32,
    den: i32,
}

impl Fraction {
    fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    fn cell_edge(depth: i32, col: i32) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Clone, Copy, Debug)]
struct Row {
    depth: i32,
    start: Fraction,
    end: Fraction,
}

impl Row {
    fn min_col(&self) -> i32 {
        // round half up of depth * start
        (2 * self.depth * self.start.num + self.start.den).div_euclid(2 * self.start.den)
    }

    fn max_col(&self) -> i32 {
        // round half down of depth * end
        -(self.end.den - 2 * self.depth * self.end.num).div_euclid(2 * self.end.den)
    }

    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }

    fn next(&self) -> Self {
        Self { depth: self.depth + 1, ..*self }
    }
}

fn scan_quadrant(
    grid: &TransparencyGrid,
    lit: &mut FovMask,
    origin: Pos,
    radius: i32,
    quadrant: Quadrant,
) {
    let mut rows =
        vec![Row { depth: 1, start: Fraction::new(-1, 1), end: Fraction::new(1, 1) }];
    while let Some(mut row) = rows.pop() {
        if row.depth > radius {
            continue;
        }
        let mut prev_wall: Option<bool> = None;
        for col in row.min_col()..=row.max_col() {
            let p = quadrant.transform(origin, row.depth, col);
            let wall = !grid.is_transparent(p);
            if (wall || row.is_symmetric(col)) && within_radius(origin, p, radius) {
                lit.light(p);
            }
            if prev_wall == Some(true) && !wall {
                row.start = Fraction::cell_edge(row.depth, col);
            }
            if prev_wall == Some(false) && wall {
                let mut next = row.next();
                next.end = Fraction::cell_edge(row.depth, col);
                rows.push(next);
            }
            prev_wall = Some(wall);
        }
        if prev_wall == Some(false) {
            rows.push(row.next());
        }
    }
}

// Recursive octant shadowcasting with integer slopes.

fn transform_octant(orig: Pos, x: i32, y: i32, oct: u8) -> Pos {
    match oct {
        0 => Pos { x: orig.x + x, y: orig.y - y },
        1 => Pos { x: orig.x + y, y: orig.y - x },
        2 => Pos { x: orig.x - y, y: orig.y - x },
        3 => Pos { x: orig.x - x, y: orig.y - y },
        4 => Pos { x: orig.x - x, y: orig.y + y },
        5 => Pos { x: orig.x - y, y: orig.y + x },
        6 => Pos { x: orig.x + y, y: orig.y + x },
        7 => Pos { x: orig.x + x, y: orig.y + y },
        _ => orig,
    }
}

#[derive(Clone, Copy)]
struct Slope {
    y: i32,
    x: i32,
}

impl Slope {
    fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    fn greater_or_equal(&self, other: &Slope) -> bool {
        self.y * other.x >= other.y * self.x
    }

    fn greater_than(&self, other: &Slope) -> bool {
        self.y * other.x > other.y * self.x
    }
}

struct OctantScan<'a> {
    grid: &'a TransparencyGrid,
    lit: &'a mut FovMask,
    orig: Pos,
    range: i32,
    oct: u8,
}

impl OctantScan<'_> {
    fn scan(&mut self, dist: i32, start: Slope, end: Slope) {
        if dist > self.range {
            return;
        }
        let mut blocked = false;
        let mut cur_start = start;
        for y in (0..=dist).rev() {
            let top = Slope::new(2 * y + 1, 2 * dist - 1);
            let bot = Slope::new(2 * y - 1, 2 * dist + 1);
            if cur_start.greater_or_equal(&bot) && top.greater_than(&end) {
                let p = transform_octant(self.orig, dist, y, self.oct);
                if within_radius(self.orig, p, self.range) {
                    self.lit.light(p);
                }
                if !self.grid.is_transparent(p) {
                    if !blocked {
                        self.scan(dist + 1, cur_start, top);
                        blocked = true;
                    }
                    cur_start = bot;
                } else if blocked {
                    blocked = false;
                }
            }
        }
        if !blocked {
            self.scan(dist + 1, cur_start, end);
        }
    }
}

/// Owns the FOV tunables and remembers the last window it wrote, so tiles that
/// scroll out of the window stop reporting as visible.
#[derive(Clone, Debug)]
pub struct VisibilityEngine {
    radius: i32,
    algorithm: FovAlgorithm,
    last_window: Option<Rect>,
}

impl VisibilityEngine {
    pub fn new(config: FovConfig) -> Self {
        Self { radius: config.radius, algorithm: config.algorithm, last_window: None }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn algorithm(&self) -> FovAlgorithm {
        self.algorithm
    }

    /// Recompute `visible`/`explored` for the camera window.
    ///
    /// # Panics
    /// If `player` is outside the camera window. Callers recentre the camera on
    /// the player before calling this.
    pub fn recompute(&mut self, world: &mut World, camera: &Camera, player: Pos) {
        let window = camera.visible_rect();
        assert!(
            window.contains(player),
            "player {player} outside camera window {window:?}; recentre before recomputing FOV"
        );

        let padded = Rect { width: window.width + 1, height: window.height + 1, ..window };
        let grid = TransparencyGrid::snapshot(world, padded);
        let lit = compute_fov(&grid, camera.to_local(player), self.radius, self.algorithm);

        if let Some(previous) = self.last_window.filter(|previous| *previous != window) {
            for pos in previous.cells().filter(|pos| !window.contains(*pos)) {
                world.map.tile_at_mut(pos).hide();
            }
        }
        for pos in window.cells() {
            world.map.tile_at_mut(pos).mark_seen(lit.is_lit(camera.to_local(pos)));
        }
        self.last_window = Some(window);

        debug!(player = %player, lit = lit.lit_count(), window = ?window, "recomputed fov");
    }
}
