// Fixed-step metric series. A NaN point means "no sample at this timestamp".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unix time in seconds.
pub type Timestamp = i64;

/// Step used by `TimeSeries::default()` (seconds).
pub const DEFAULT_STEP_SECS: i64 = 15;

/// A series whose last this-many points are all NaN is treated as missing data.
pub const MISSING_TAIL_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSeriesError {
    #[error("step must be > 0, got {0}")]
    InvalidStep(i64),
    #[error("timestamp {t} is outside of series window [{from}, {to}]")]
    OutOfRange {
        t: Timestamp,
        from: Timestamp,
        to: Timestamp,
    },
    #[error("timestamp {t} is not aligned to step {step} starting at {from}")]
    Misaligned {
        t: Timestamp,
        from: Timestamp,
        step: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    from: Timestamp,
    step: i64,
    #[serde(serialize_with = "nan_as_null::serialize")]
    data: Vec<f32>,
}

/// Wire shape before step validation.
#[derive(Deserialize)]
struct RawTimeSeries {
    from: Timestamp,
    step: i64,
    #[serde(default, deserialize_with = "nan_as_null::deserialize")]
    data: Vec<f32>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = TimeSeriesError;

    fn try_from(raw: RawTimeSeries) -> Result<Self, Self::Error> {
        Self::from_values(raw.from, raw.step, raw.data)
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self {
            from: 0,
            step: DEFAULT_STEP_SECS,
            data: Vec::new(),
        }
    }
}

impl TimeSeries {
    /// Series of `points` NaN points starting at `from`.
    pub fn new(from: Timestamp, points: usize, step: i64) -> Result<Self, TimeSeriesError> {
        Self::from_values(from, step, vec![f32::NAN; points])
    }

    pub fn from_values(
        from: Timestamp,
        step: i64,
        values: impl Into<Vec<f32>>,
    ) -> Result<Self, TimeSeriesError> {
        if step <= 0 {
            return Err(TimeSeriesError::InvalidStep(step));
        }
        Ok(Self {
            from,
            step,
            data: values.into(),
        })
    }

    pub fn from(&self) -> Timestamp {
        self.from
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Timestamp of the last point (equals `from` for a zero-length series).
    /// Saturates at `Timestamp::MAX` when the window end does not fit.
    pub fn to(&self) -> Timestamp {
        let last = self.data.len().saturating_sub(1);
        self.point_time(last).unwrap_or(Timestamp::MAX)
    }

    /// Number of points in the window, NaN points included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the window has no points at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when no point holds a sample (the window may still have NaN points).
    pub fn has_no_samples(&self) -> bool {
        self.data.iter().all(|v| v.is_nan())
    }

    /// True when the last `n` points are all NaN. Series shorter than `n` never have an empty tail.
    pub fn tail_is_empty(&self, n: usize) -> bool {
        if n == 0 || self.data.len() < n {
            return false;
        }
        self.data[self.data.len() - n..].iter().all(|v| v.is_nan())
    }

    /// Most recent sample, or NaN when the series holds none.
    pub fn last(&self) -> f32 {
        self.data
            .iter()
            .rev()
            .copied()
            .find(|v| !v.is_nan())
            .unwrap_or(f32::NAN)
    }

    /// Value at `t`, NaN when `t` is outside the window or not on a step boundary.
    pub fn get(&self, t: Timestamp) -> f32 {
        self.index(t).map(|i| self.data[i]).unwrap_or(f32::NAN)
    }

    pub fn set(&mut self, t: Timestamp, value: f32) -> Result<(), TimeSeriesError> {
        let i = self.index(t)?;
        self.data[i] = value;
        Ok(())
    }

    /// Appends a point one step after the current end of the window.
    pub fn push(&mut self, value: f32) {
        self.data.push(value);
    }

    /// Points with their timestamps; stops at the first timestamp past `Timestamp::MAX`.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, f32)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map_while(|(i, v)| self.point_time(i).map(|t| (t, *v)))
    }

    fn point_time(&self, i: usize) -> Option<Timestamp> {
        i64::try_from(i)
            .ok()?
            .checked_mul(self.step)?
            .checked_add(self.from)
    }

    fn index(&self, t: Timestamp) -> Result<usize, TimeSeriesError> {
        let out_of_range = || TimeSeriesError::OutOfRange {
            t,
            from: self.from,
            to: self.to(),
        };
        if t < self.from || self.data.is_empty() {
            return Err(out_of_range());
        }
        let offset = t.checked_sub(self.from).ok_or_else(out_of_range)?;
        if offset % self.step != 0 {
            return Err(TimeSeriesError::Misaligned {
                t,
                from: self.from,
                step: self.step,
            });
        }
        let i = usize::try_from(offset / self.step).map_err(|_| out_of_range())?;
        if i >= self.data.len() {
            return Err(out_of_range());
        }
        Ok(i)
    }
}

pub fn is_nan(v: f32) -> bool {
    v.is_nan()
}

/// No samples at all, or the machine stopped reporting at the end of the window.
pub fn data_is_missing(ts: &TimeSeries) -> bool {
    ts.has_no_samples() || ts.tail_is_empty(MISSING_TAIL_POINTS)
}

// JSON has no NaN; points without a sample travel as null.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(data: &[f32], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(data.iter().map(|v| if v.is_nan() { None } else { Some(*v) }))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f32>, D::Error> {
        let raw: Vec<Option<f32>> = Vec::deserialize(d)?;
        Ok(raw.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect())
    }
}
