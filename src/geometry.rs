#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

/// Coordinate extent of the playing surface, origin at one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchGeometry {
    pub length_x: f64,
    pub width_y: f64,
}

impl PitchGeometry {
    // StatsBomb coordinates are yards.
    pub const STATSBOMB: Self = Self {
        length_x: 120.0,
        width_y: 80.0,
    };

    pub fn new(length_x: f64, width_y: f64) -> Self {
        Self { length_x, width_y }
    }

    pub fn mirror_point(&self, p: Point) -> Point {
        Point::new(self.length_x - p.x, self.width_y - p.y)
    }

    pub fn half_x(&self) -> f64 {
        self.length_x / 2.0
    }
}

impl Default for PitchGeometry {
    fn default() -> Self {
        Self::STATSBOMB
    }
}

/// Places a shot so both teams attack the same goal: the primary team keeps its
/// coordinates, the other team is reflected through the pitch centre.
pub fn mirror(position: Point, geometry: &PitchGeometry, is_primary: bool) -> Point {
    if is_primary {
        position
    } else {
        geometry.mirror_point(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchExtent {
    Full,
    Half,
}

/// The visible portion of a pitch and how it is laid onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchView {
    pub geometry: PitchGeometry,
    pub orientation: Orientation,
    pub extent: PitchExtent,
}

impl PitchView {
    pub fn full(geometry: PitchGeometry) -> Self {
        Self {
            geometry,
            orientation: Orientation::Horizontal,
            extent: PitchExtent::Full,
        }
    }

    pub fn vertical_half(geometry: PitchGeometry) -> Self {
        Self {
            geometry,
            orientation: Orientation::Vertical,
            extent: PitchExtent::Half,
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        match self.extent {
            PitchExtent::Full => (0.0, self.geometry.length_x),
            PitchExtent::Half => (self.geometry.half_x(), self.geometry.length_x),
        }
    }

    /// Canvas size in pitch units as (width, height).
    pub fn canvas_units(&self) -> (f64, f64) {
        let (x_min, x_max) = self.x_range();
        let along = x_max - x_min;
        match self.orientation {
            Orientation::Horizontal => (along, self.geometry.width_y),
            Orientation::Vertical => (self.geometry.width_y, along),
        }
    }

    /// Maps a pitch point to canvas units with the origin at the top-left.
    /// Vertical views put the attacked goal (`x = length_x`) at the top.
    pub fn to_canvas(&self, p: Point) -> Point {
        let (x_min, x_max) = self.x_range();
        match self.orientation {
            Orientation::Horizontal => Point::new(p.x - x_min, p.y),
            Orientation::Vertical => Point::new(p.y, x_max - p.x),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        let (x_min, x_max) = self.x_range();
        p.x >= x_min && p.x <= x_max && p.y >= 0.0 && p.y <= self.geometry.width_y
    }
}
