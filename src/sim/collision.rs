//! Collision detection
//!
//! Entities are approximated by circles inscribed in their squares: two
//! entities collide when their centers are closer than the sum of the radii.

use glam::Vec2;

use super::state::Entity;

/// Circle overlap test between two centers with the given diameters.
///
/// Touching exactly at the boundary does not count as a collision.
#[inline]
pub fn centers_collide(a: Vec2, b: Vec2, size_a: f32, size_b: f32) -> bool {
    crate::distance(a, b) < size_a / 2.0 + size_b / 2.0
}

/// Check collision between two entities using explicit sizes
pub fn check_collision<A, B>(a: &A, b: &B, size_a: f32, size_b: f32) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    centers_collide(a.center(), b.center(), size_a, size_b)
}

/// Check collision between two entities using their own sizes
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    check_collision(a, b, a.size(), b.size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Enemy, Player};
    use proptest::prelude::*;

    #[test]
    fn test_player_coin_at_spawn() {
        let player = Player::default();
        let coin = Coin::at(Vec2::new(200.0, 200.0));
        assert!(check_collision(&player, &coin, player.width, coin.size));
        assert!(overlaps(&player, &coin));
    }

    #[test]
    fn test_tangency_is_not_collision() {
        // Player center (220, 220), enemy center 40 units to the right
        let player = Player::default();
        let enemy = Enemy::at(Vec2::new(240.0, 200.0));
        assert!(!overlaps(&player, &enemy));

        let enemy = Enemy::at(Vec2::new(239.9, 200.0));
        assert!(overlaps(&player, &enemy));
    }

    #[test]
    fn test_far_apart() {
        let player = Player::default();
        let coin = Coin::at(Vec2::new(500.0, 10.0));
        assert!(!overlaps(&player, &coin));
    }

    #[test]
    fn test_explicit_sizes_override() {
        let player = Player::default();
        let coin = Coin::at(Vec2::new(260.0, 210.0));
        // Centers 50 apart
        assert!(!check_collision(&player, &coin, 40.0, 20.0));
        assert!(check_collision(&player, &coin, 80.0, 40.0));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            sa in 0.0f32..100.0, sb in 0.0f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(
                centers_collide(a, b, sa, sb),
                centers_collide(b, a, sb, sa)
            );

            let coin = Coin::at(a);
            let enemy = Enemy::at(b);
            prop_assert_eq!(
                check_collision(&coin, &enemy, sa, sb),
                check_collision(&enemy, &coin, sb, sa)
            );
        }
    }
}
