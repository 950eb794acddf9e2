use std::time::{Duration, Instant};

/// Run `f` once and return its result together with the wall-clock time it took.
pub fn time<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Measures consecutive phases: each `lap` returns the time since the previous one.
pub struct Stopwatch {
    last: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch { last: Instant::now() }
    }

    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_returns_result() {
        let (value, elapsed) = time(|| {
            thread::sleep(Duration::from_millis(5));
            21 * 2
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_lap_covers_elapsed_time() {
        let mut watch = Stopwatch::start();
        thread::sleep(Duration::from_millis(5));
        let first = watch.lap();
        assert!(first >= Duration::from_millis(5));
    }
}
