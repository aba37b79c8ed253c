/// A named compass or vertical direction and the offset it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub name: &'static str,
    pub delta: (i64, i64, i64),
}

pub const NORTH: Direction = Direction { name: "north", delta: (0, 1, 0) };
pub const SOUTH: Direction = Direction { name: "south", delta: (0, -1, 0) };
pub const EAST: Direction = Direction { name: "east", delta: (1, 0, 0) };
pub const WEST: Direction = Direction { name: "west", delta: (-1, 0, 0) };
pub const UP: Direction = Direction { name: "up", delta: (0, 0, 1) };
pub const DOWN: Direction = Direction { name: "down", delta: (0, 0, -1) };

const DIRECTIONS: [Direction; 6] = [NORTH, SOUTH, EAST, WEST, UP, DOWN];

/// Exact, case-sensitive lookup against the registry.
pub fn resolve(name: &str) -> Option<Direction> {
    DIRECTIONS.iter().copied().find(|d| d.name == name)
}

pub fn all() -> &'static [Direction] {
    &DIRECTIONS
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        let (dx, dy, dz) = self.delta;
        DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.delta == (-dx, -dy, -dz))
            .unwrap_or(*self)
    }
}
