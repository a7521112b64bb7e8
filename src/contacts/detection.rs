//! Contact detection - overlap tests and the contact-event queue
//!
//! Runs after the physics systems each tick. Overlapping bodies whose
//! contact-test masks intersect are queued as unordered (bodyA, bodyB)
//! pairs; the resolver drains the queue in the same tick, so a contact is
//! fully resolved before the next tick's gravity computation runs.

use bevy::prelude::*;

use crate::constants::*;
use crate::contacts::death::DeathAnimation;
use crate::player::Player;
use crate::world::{CollisionProfile, Tile, TileKind};

/// One side of a contact pair
#[derive(Clone, Copy, Debug)]
pub struct ContactBody {
    pub entity: Entity,
    pub kind: BodyKind,
    pub position: Vec2,
}

/// What a contact body is, carried as a typed tag rather than a node name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Player,
    Tile(TileKind),
}

/// An unordered contact pair delivered by detection
#[derive(Clone, Copy, Debug)]
pub struct ContactPair {
    pub a: ContactBody,
    pub b: ContactBody,
}

impl ContactPair {
    /// Find which side is the player, regardless of pairing order, and
    /// return (player, other, other's tile kind). Pairs without a player
    /// side, or without a tile side, resolve to None.
    pub fn player_and_tile(&self) -> Option<(ContactBody, ContactBody, TileKind)> {
        let (player, other) = match (self.a.kind, self.b.kind) {
            (BodyKind::Player, _) => (self.a, self.b),
            (_, BodyKind::Player) => (self.b, self.a),
            _ => return None,
        };

        match other.kind {
            BodyKind::Tile(kind) => Some((player, other, kind)),
            BodyKind::Player => None,
        }
    }
}

/// Queue of contact pairs produced this tick
#[derive(Resource, Default)]
pub struct ContactEvents(pub Vec<ContactPair>);

impl ContactEvents {
    pub fn push(&mut self, pair: ContactPair) {
        self.0.push(pair);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ContactPair> {
        std::mem::take(&mut self.0).into_iter()
    }
}

/// Circle overlap test used for all contact bodies
pub fn circles_touch(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

/// Queue a contact pair for every player/tile overlap whose masks ask for
/// notification. A dying (frozen) player generates no contacts.
pub fn detect_contacts(
    mut events: ResMut<ContactEvents>,
    players: Query<
        (Entity, &Transform, &CollisionProfile),
        (With<Player>, Without<DeathAnimation>),
    >,
    tiles: Query<(Entity, &Transform, &Tile, &CollisionProfile), Without<Player>>,
) {
    for (player_entity, player_transform, player_profile) in &players {
        let player_pos = player_transform.translation.truncate();

        for (tile_entity, tile_transform, tile, tile_profile) in &tiles {
            if !player_profile.notifies(tile_profile) {
                continue;
            }

            let tile_pos = tile_transform.translation.truncate();
            if !circles_touch(player_pos, PLAYER_RADIUS, tile_pos, TILE_RADIUS) {
                continue;
            }

            events.push(ContactPair {
                a: ContactBody {
                    entity: player_entity,
                    kind: BodyKind::Player,
                    position: player_pos,
                },
                b: ContactBody {
                    entity: tile_entity,
                    kind: BodyKind::Tile(tile.0),
                    position: tile_pos,
                },
            });
        }
    }
}
