//! World components - tile tags, collision profiles, vortex spin

use bevy::prelude::*;

use crate::constants::*;

/// Kind of placeable entity in the level grid
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileKind {
    Wall,
    Vortex,
    Star,
    Finish,
    Empty,
}

impl TileKind {
    /// Map a level-text character to its tile kind.
    /// Returns None for characters outside the level alphabet.
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'x' => Some(TileKind::Wall),
            'v' => Some(TileKind::Vortex),
            's' => Some(TileKind::Star),
            'f' => Some(TileKind::Finish),
            ' ' => Some(TileKind::Empty),
            _ => None,
        }
    }

    /// Category bit for this kind's physics body
    pub fn category(self) -> u32 {
        match self {
            TileKind::Wall => CATEGORY_WALL,
            TileKind::Vortex => CATEGORY_VORTEX,
            TileKind::Star => CATEGORY_STAR,
            TileKind::Finish => CATEGORY_FINISH,
            TileKind::Empty => 0,
        }
    }
}

/// Typed tag carried by every placed tile entity.
/// Contact dispatch reads this instead of comparing node names.
#[derive(Component, Clone, Copy, Debug)]
pub struct Tile(pub TileKind);

/// Marker for wall tiles (the only physically collidable kind)
#[derive(Component)]
pub struct Wall;

/// Marks entities that belong to the current level (despawned on reload)
#[derive(Component)]
pub struct LevelTile;

/// Perpetual rotation, radians per second. Cosmetic; vortexes only.
#[derive(Component)]
pub struct Rotating(pub f32);

/// Collision bitmask set for one physics body.
///
/// `category` identifies the body, `contact_test` selects which categories
/// generate contact notifications, `collision` selects which categories get a
/// physical collision response.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionProfile {
    pub category: u32,
    pub contact_test: u32,
    pub collision: u32,
}

impl CollisionProfile {
    /// Profile for a static tile of the given kind.
    ///
    /// Walls collide physically and never notify (contact_test stays 0).
    /// Vortex/star/finish notify on player contact and have no physical
    /// response - the marble passes through them.
    pub fn for_tile(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall => Self {
                category: CATEGORY_WALL,
                contact_test: 0,
                collision: CATEGORY_ALL,
            },
            _ => Self {
                category: kind.category(),
                contact_test: CATEGORY_PLAYER,
                collision: 0,
            },
        }
    }

    /// Profile for the player marble, the only dynamic body
    pub fn player() -> Self {
        Self {
            category: CATEGORY_PLAYER,
            contact_test: CATEGORY_STAR | CATEGORY_VORTEX | CATEGORY_FINISH,
            collision: CATEGORY_ALL,
        }
    }

    /// True if contact between two bodies should be reported.
    /// Symmetric: either side's contact_test may claim the pair.
    pub fn notifies(&self, other: &CollisionProfile) -> bool {
        self.category & other.contact_test != 0 || other.category & self.contact_test != 0
    }
}

/// Spin vortexes at their fixed rate
pub fn rotate_vortices(time: Res<Time>, mut query: Query<(&mut Transform, &Rotating)>) {
    for (mut transform, rotating) in &mut query {
        transform.rotate_z(rotating.0 * time.delta_secs());
    }
}
