//! Delivery sampling and scheduling
//!
//! Each delivery is released from a randomized point at the bowler's end,
//! aimed at a randomized spot just past the stumps. Sampling is factored
//! out of the tick so tests can construct deliveries directly.

use glam::Vec3;
use rand::Rng;

use crate::consts::*;

/// Countdown to the next delivery
#[derive(Debug, Clone, Copy)]
pub struct DeliverySchedule {
    /// Time accumulated since the last delivery ended
    pub since_last: f32,
    /// Randomized gap before the next one
    pub next_delay: f32,
}

impl DeliverySchedule {
    /// Fresh schedule with a newly sampled delay
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            since_last: 0.0,
            next_delay: rng.random_range(DELIVERY_DELAY_MIN..DELIVERY_DELAY_MAX),
        }
    }

    /// Seconds until the next delivery is due
    pub fn countdown(&self) -> f32 {
        (self.next_delay - self.since_last).max(0.0)
    }

    /// True once the gap has elapsed
    pub fn due(&self) -> bool {
        self.since_last > self.next_delay
    }
}

/// A sampled delivery: where the ball starts and how it leaves the hand
#[derive(Debug, Clone, Copy)]
pub struct Delivery {
    pub start: Vec3,
    pub velocity: Vec3,
}

impl Delivery {
    /// Sample a delivery: lateral release point, release height, target
    /// and pace, all uniform within their ranges
    pub fn sample(rng: &mut impl Rng) -> Self {
        let start = Vec3::new(
            rng.random_range(-RELEASE_LATERAL..RELEASE_LATERAL),
            rng.random_range(RELEASE_HEIGHT_MIN..RELEASE_HEIGHT_MAX),
            RELEASE_Z,
        );
        let target = Vec3::new(
            0.0,
            rng.random_range(TARGET_HEIGHT_MIN..TARGET_HEIGHT_MAX),
            TARGET_Z,
        );
        let pace = rng.random_range(PACE_MIN..PACE_MAX);
        Self {
            start,
            velocity: (target - start).normalize() * pace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_delivery_sample_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(123);
        for _ in 0..100 {
            let d = Delivery::sample(&mut rng);
            assert!(d.start.x >= -RELEASE_LATERAL && d.start.x < RELEASE_LATERAL);
            assert!(d.start.y >= RELEASE_HEIGHT_MIN && d.start.y < RELEASE_HEIGHT_MAX);
            assert_eq!(d.start.z, RELEASE_Z);

            // Speed equals the sampled pace; direction is down the pitch
            let pace = d.velocity.length();
            assert!(pace >= PACE_MIN - 1e-3 && pace < PACE_MAX + 1e-3);
            assert!(d.velocity.z < 0.0);
        }
    }

    #[test]
    fn test_schedule_sample_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(456);
        for _ in 0..100 {
            let s = DeliverySchedule::sample(&mut rng);
            assert_eq!(s.since_last, 0.0);
            assert!(s.next_delay >= DELIVERY_DELAY_MIN && s.next_delay < DELIVERY_DELAY_MAX);
            assert!(!s.due());
            assert_eq!(s.countdown(), s.next_delay);
        }
    }

    #[test]
    fn test_schedule_becomes_due() {
        let mut rng = Pcg32::seed_from_u64(789);
        let mut s = DeliverySchedule::sample(&mut rng);
        s.since_last = s.next_delay + 0.01;
        assert!(s.due());
        assert_eq!(s.countdown(), 0.0);
    }
}
