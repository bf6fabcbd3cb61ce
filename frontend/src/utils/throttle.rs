/// Leading-edge rate limiter: lets one call through, then ignores everything
/// until `interval_ms` has elapsed.
///
/// Timestamps are supplied by the caller (`Date.now()` in the browser) so the
/// gate can be driven deterministically.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            last_fired: None,
        }
    }

    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_fires() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_fire(12_345.0));
    }

    #[test]
    fn calls_inside_the_window_are_dropped() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(10.0));
        assert!(!throttle.try_fire(99.9));
        assert!(throttle.try_fire(100.0));
        assert!(!throttle.try_fire(150.0));
        assert!(throttle.try_fire(250.0));
    }

    #[test]
    fn burst_of_events_fires_once_per_interval() {
        let mut throttle = Throttle::new(100);
        let fired = (0..1_000)
            .filter(|t| throttle.try_fire(*t as f64))
            .count();
        assert_eq!(fired, 10);
    }
}
