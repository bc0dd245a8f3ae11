use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// One rendered frame of a statistic counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Linear count-up from zero to `target` over the configured duration.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        let frames = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_FRAME_MS);
        Self {
            target,
            increment: target / frames,
            current: 0.0,
        }
    }

    /// Parses a `data-target` attribute value.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .map(Self::new)
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target {
            CounterFrame {
                text: format_counter(self.current, self.target),
                finished: false,
            }
        } else {
            CounterFrame {
                text: format_counter(self.target, self.target),
                finished: true,
            }
        }
    }
}

/// Small targets (ratings like 4.9) keep one decimal; everything else is a
/// floored integer with thousands separators.
pub fn format_counter(value: f64, target: f64) -> String {
    if target < 10.0 {
        format!("{:.1}", value)
    } else {
        group_thousands(value.floor() as i64)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_ratings_with_one_decimal() {
        assert_eq!(format_counter(4.9, 4.9), "4.9");
        assert_eq!(format_counter(0.03675, 4.9), "0.0");
    }

    #[test]
    fn formats_large_values_with_separators() {
        assert_eq!(format_counter(1234.7, 5000.0), "1,234");
        assert_eq!(format_counter(999.0, 5000.0), "999");
        assert_eq!(format_counter(1_000_000.0, 1_000_000.0), "1,000,000");
        assert_eq!(format_counter(10.0, 10.0), "10");
    }

    #[test]
    fn reaches_exact_target_after_all_frames() {
        let mut animation = CounterAnimation::new(500.0);
        let frames = (COUNTER_DURATION_MS / COUNTER_FRAME_MS) as usize;
        let mut last = None;
        for _ in 0..frames + 2 {
            let frame = animation.step();
            let finished = frame.finished;
            last = Some(frame);
            if finished {
                break;
            }
        }
        let last = last.unwrap();
        assert!(last.finished);
        assert_eq!(last.text, "500");
    }

    #[test]
    fn intermediate_frames_stay_below_target() {
        let mut animation = CounterAnimation::new(2500.0);
        let first = animation.step();
        assert!(!first.finished);
        assert_eq!(first.text, "20");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0.0);
        let frame = animation.step();
        assert!(frame.finished);
        assert_eq!(frame.text, "0.0");
    }

    #[test]
    fn rejects_non_numeric_targets() {
        assert!(CounterAnimation::parse("abc").is_none());
        assert!(CounterAnimation::parse(" 250 ").is_some());
    }
}
