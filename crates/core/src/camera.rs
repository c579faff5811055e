//! Clamped viewport over the map. The same window bounds rendering and FOV.

use crate::types::{Pos, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    top_left: Pos,
    width: i32,
    height: i32,
    map_width: i32,
    map_height: i32,
}

impl Camera {
    pub fn new(width: i32, height: i32, map_width: i32, map_height: i32) -> Self {
        assert!(
            width > 0 && height > 0 && width <= map_width && height <= map_height,
            "camera {width}x{height} must fit inside map {map_width}x{map_height}"
        );
        Self { top_left: Pos::default(), width, height, map_width, map_height }
    }

    pub fn top_left(&self) -> Pos {
        self.top_left
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_top_left(&mut self, top_left: Pos) {
        self.top_left = Pos {
            x: top_left.x.clamp(0, self.map_width - self.width),
            y: top_left.y.clamp(0, self.map_height - self.height),
        };
    }

    pub fn center_at(&mut self, location: Pos) {
        self.set_top_left(location.offset(-(self.width / 2), -(self.height / 2)));
    }

    pub fn visible_rect(&self) -> Rect {
        Rect { x: self.top_left.x, y: self.top_left.y, width: self.width, height: self.height }
    }

    pub fn contains(&self, location: Pos) -> bool {
        self.visible_rect().contains(location)
    }

    /// Map coordinates to window-local coordinates.
    pub fn to_local(&self, location: Pos) -> Pos {
        location.offset(-self.top_left.x, -self.top_left.y)
    }
}
