/// Translates whole-degree headings to 8-point compass directions. (N, NE, E, etc.)
/// Represents an 8-point compass rose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,  // north
    NE, // northeast
    E,  // east
    SE, // southeast
    S,  // south
    SW, // southwest
    W,  // west
    NW, // northwest
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::N => "north",
            Direction::NE => "northeast",
            Direction::E => "east",
            Direction::SE => "southeast",
            Direction::S => "south",
            Direction::SW => "southwest",
            Direction::W => "west",
            Direction::NW => "northwest",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

/// Converts a rounded azimuth (0-359) to an 8-point compass direction.
///
/// Buckets are inclusive and checked in order; everything else is north.
/// Values of 360 and above also land on north.
pub fn classify(azimuth: u16) -> Direction {
    match azimuth {
        23..=67 => Direction::NE,
        68..=112 => Direction::E,
        113..=157 => Direction::SE,
        158..=202 => Direction::S,
        203..=247 => Direction::SW,
        248..=292 => Direction::W,
        293..=337 => Direction::NW,
        _ => Direction::N,
    }
}
