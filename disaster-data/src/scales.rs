//! Positional and size scales, modeled on their d3 counterparts.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Linear scale from calendar dates to pixels, at day resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    fn span_days(&self) -> f64 {
        (self.domain.1 - self.domain.0).num_days() as f64
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        let (r0, r1) = self.range;
        let span = self.span_days();
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        let t = (date - self.domain.0).num_days() as f64 / span;
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, calendar-aligned dates inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (start, end) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        TimeInterval::for_count(self.span_days().abs(), count).range(start, end)
    }
}

/// Calendar intervals a time axis can step by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Days(u32),
    /// Sunday-based weeks
    Week,
    /// Every n-th month, aligned to January
    Months(u32),
    Year,
}

impl TimeInterval {
    const CANDIDATES: [TimeInterval; 6] = [
        TimeInterval::Days(1),
        TimeInterval::Days(2),
        TimeInterval::Week,
        TimeInterval::Months(1),
        TimeInterval::Months(3),
        TimeInterval::Year,
    ];

    fn approx_days(&self) -> f64 {
        match self {
            TimeInterval::Days(n) => *n as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Months(n) => 30.0 * *n as f64,
            TimeInterval::Year => 365.0,
        }
    }

    /// Pick the interval whose length is closest (by ratio) to `span / count`.
    pub fn for_count(span_days: f64, count: usize) -> TimeInterval {
        let target = span_days / count.max(1) as f64;
        match Self::CANDIDATES.iter().position(|c| c.approx_days() > target) {
            None => TimeInterval::Year,
            Some(0) => TimeInterval::Days(1),
            Some(i) => {
                let below = Self::CANDIDATES[i - 1];
                let above = Self::CANDIDATES[i];
                if target / below.approx_days() < above.approx_days() / target {
                    below
                } else {
                    above
                }
            }
        }
    }

    /// Interval boundaries in `[start, end]`.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = self.ceil(start);
        while let Some(date) = current {
            if date > end {
                break;
            }
            dates.push(date);
            current = self.offset(date);
        }
        dates
    }

    /// First boundary on or after `date`.
    fn ceil(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeInterval::Days(_) => Some(date),
            TimeInterval::Week => {
                let from_sunday = date.weekday().num_days_from_sunday();
                if from_sunday == 0 {
                    Some(date)
                } else {
                    date.checked_add_days(Days::new(7 - from_sunday as u64))
                }
            }
            TimeInterval::Months(n) => {
                let step = (*n).max(1);
                let mut first = if date.day() == 1 {
                    Some(date)
                } else {
                    date.with_day(1)
                        .and_then(|d| d.checked_add_months(Months::new(1)))
                };
                while let Some(d) = first {
                    if d.month0() % step == 0 {
                        break;
                    }
                    first = d.checked_add_months(Months::new(1));
                }
                first
            }
            TimeInterval::Year => {
                if date.ordinal() == 1 {
                    Some(date)
                } else {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                }
            }
        }
    }

    fn offset(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeInterval::Days(n) => date.checked_add_days(Days::new((*n).max(1) as u64)),
            TimeInterval::Week => date.checked_add_days(Days::new(7)),
            TimeInterval::Months(n) => date.checked_add_months(Months::new((*n).max(1))),
            TimeInterval::Year => date.checked_add_months(Months::new(12)),
        }
    }
}

/// Discrete scale giving every domain value an equal-height band.
///
/// Duplicate domain values are dropped, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
}

impl<T: PartialEq + Clone> BandScale<T> {
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for value in domain {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self {
            domain: unique,
            range,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Height of one band.
    pub fn bandwidth(&self) -> f64 {
        (self.range.1 - self.range.0) / self.domain.len().max(1) as f64
    }

    /// Start of the band for `value`, or `None` when it is not in the domain.
    pub fn scale(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|v| v == value)
            .map(|i| self.range.0 + i as f64 * self.bandwidth())
    }
}

/// Square-root scale: output grows with the square root of the input, so
/// a circle radius from it gives an area proportional to the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

fn signed_sqrt(x: f64) -> f64 {
    x.signum() * x.abs().sqrt()
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Unclamped mapping; a single-point domain maps everything to the middle
    /// of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (a, b) = (signed_sqrt(self.domain.0), signed_sqrt(self.domain.1));
        let (r0, r1) = self.range;
        let t = if b - a != 0.0 {
            (signed_sqrt(value) - a) / (b - a)
        } else {
            0.5
        };
        r0 + t * (r1 - r0)
    }
}
