//! Circle overlap tests and the removal passes built on them
//!
//! All tests use a strict `<`: circles that exactly touch do not collide.

use glam::Vec2;

use super::entity::{Bullet, Enemy, Player};
use crate::distance;

/// Strict circle overlap
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

/// A resolved bullet-enemy hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub enemy_id: u32,
    pub bullet_id: u32,
}

/// Remove every enemy and bullet that overlap each other.
///
/// Overlaps are judged against the collections as they stand on entry, then
/// the dead are swept in one pass, so the outcome does not depend on
/// iteration order and a removal never hides another overlapping pair. A
/// bullet touching several enemies takes all of them out. Each removed enemy
/// reports the first bullet it touched.
pub fn resolve_bullet_hits(enemies: &mut Vec<Enemy>, bullets: &mut Vec<Bullet>) -> Vec<Hit> {
    let mut bullet_dead = vec![false; bullets.len()];
    let mut enemy_dead = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (ei, enemy) in enemies.iter().enumerate() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if circles_overlap(enemy.pos, enemy.radius, bullet.pos, bullet.radius) {
                if !enemy_dead[ei] {
                    hits.push(Hit {
                        enemy_id: enemy.id,
                        bullet_id: bullet.id,
                    });
                }
                enemy_dead[ei] = true;
                bullet_dead[bi] = true;
            }
        }
    }

    if !hits.is_empty() {
        let mut dead = enemy_dead.iter();
        enemies.retain(|_| !dead.next().copied().unwrap_or(false));
        let mut dead = bullet_dead.iter();
        bullets.retain(|_| !dead.next().copied().unwrap_or(false));
    }

    hits
}

/// Id of the first enemy touching the player, if any
pub fn player_contact(player: &Player, enemies: &[Enemy]) -> Option<u32> {
    enemies
        .iter()
        .find(|e| circles_overlap(player.pos, player.radius, e.pos, e.radius))
        .map(|e| e.id)
}
