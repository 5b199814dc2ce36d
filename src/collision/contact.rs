//! Collision outcome types.

use std::fmt;

/// Which side of the first rectangle touched the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a circle sits relative to a rectangle.
///
/// ```text
///   TopLeft    | TopMiddle    | TopRight
///  ------------+--------------+------------
///   LeftMiddle |  rectangle   | RightMiddle
///  ------------+--------------+------------
///   BottomLeft | BottomMiddle | BottomRight
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    TopMiddle,
    TopRight,
    LeftMiddle,
    RightMiddle,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Region {
    /// Edge regions resolve as rectangle contacts, corners as point contacts.
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Region::TopMiddle | Region::BottomMiddle | Region::LeftMiddle | Region::RightMiddle
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::TopLeft => "topLeft",
            Region::TopMiddle => "topMiddle",
            Region::TopRight => "topRight",
            Region::LeftMiddle => "leftMiddle",
            Region::RightMiddle => "rightMiddle",
            Region::BottomLeft => "bottomLeft",
            Region::BottomMiddle => "bottomMiddle",
            Region::BottomRight => "bottomRight",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive result from the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Predicate hit, or a circle/point resolution.
    Hit,
    /// Rectangle resolution.
    Side(Side),
    /// Circle-vs-rectangle test or resolution.
    Region(Region),
}

impl From<Side> for Collision {
    fn from(side: Side) -> Self {
        Collision::Side(side)
    }
}

impl From<Region> for Collision {
    fn from(region: Region) -> Self {
        Collision::Region(region)
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Hit => f.write_str("hit"),
            Collision::Side(side) => side.fmt(f),
            Collision::Region(region) => region.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Side::Right.to_string(), "right");
        assert_eq!(Region::BottomLeft.to_string(), "bottomLeft");
        assert_eq!(Collision::from(Region::TopMiddle).to_string(), "topMiddle");
        assert_eq!(Collision::Hit.to_string(), "hit");
    }

    #[test]
    fn test_edge_regions() {
        assert!(Region::LeftMiddle.is_edge());
        assert!(Region::TopMiddle.is_edge());
        assert!(!Region::TopRight.is_edge());
        assert!(!Region::BottomLeft.is_edge());
    }
}
