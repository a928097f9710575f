//! Domain-to-pixel scales, following d3-scale semantics: band and point
//! scales for categorical axes, a linear scale with `nice`/`ticks` for
//! numeric axes.

/// Inner and outer padding fraction for band scales.
const BAND_PADDING: f64 = 0.1;

/// Maximum of `values` with a floor of zero. NaN entries are skipped, so a
/// row with missing series keys cannot poison the domain.
pub fn domain_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}

/// Assigns each category an equal-width band across the range, with 10% of
/// one step of padding between bands and at both ends.
#[derive(Debug, Clone)]
pub struct BandScale {
    categories: Vec<String>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> Self {
        let n = categories.len() as f64;
        let extent = range.1 - range.0;
        let (step, bandwidth, start) = if categories.is_empty() {
            (0.0, 0.0, range.0)
        } else {
            // d3 band(): step = extent / (n - inner + 2 * outer), band start
            // offset = outer * step with centered alignment.
            let step = extent / (n + BAND_PADDING);
            (
                step,
                step * (1.0 - BAND_PADDING),
                range.0 + step * BAND_PADDING,
            )
        };
        Self {
            categories,
            step,
            bandwidth,
            start,
        }
    }

    /// Band start for a category. Unknown names (and duplicates beyond the
    /// first occurrence) land on the first band.
    pub fn position(&self, name: &str) -> f64 {
        let idx = self.categories.iter().position(|c| c == name).unwrap_or(0);
        self.start + self.step * idx as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Assigns each category a single point, evenly spaced across the range with
/// both endpoints used. A single category sits at the range midpoint.
#[derive(Debug, Clone)]
pub struct PointScale {
    categories: Vec<String>,
    step: f64,
    start: f64,
}

impl PointScale {
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> Self {
        let extent = range.1 - range.0;
        let (step, start) = match categories.len() {
            0 => (0.0, range.0),
            1 => (extent, range.0 + extent * 0.5),
            n => (extent / (n as f64 - 1.0), range.0),
        };
        Self {
            categories,
            step,
            start,
        }
    }

    pub fn position(&self, name: &str) -> f64 {
        let idx = self.categories.iter().position(|c| c == name).unwrap_or(0);
        self.position_of_index(idx)
    }

    pub fn position_of_index(&self, idx: usize) -> f64 {
        self.start + self.step * idx as f64
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Linear interpolation from a numeric domain onto a pixel range.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Widens the domain outward to round tick boundaries (d3 `nice`). The
    /// loop re-derives the step until it stabilizes, ten iterations at most.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        if !start.is_finite() || !stop.is_finite() {
            return self;
        }
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if step == prestep {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }
        self
    }

    /// Maps a domain value to the range. A collapsed domain maps everything
    /// to the range start, which for an inverted y range is the pixel
    /// baseline. NaN passes through for the serializer to neutralize.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain (d3 `ticks`).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        tick_values(self.domain.0, self.domain.1, count)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// d3's tick increment: the step between ticks for a target count, as a
/// power of ten times 1, 2 or 5. Positive values are multipliers; negative
/// values encode the reciprocal of a sub-unit step. NaN when the span or
/// count is degenerate.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Integer tick bounds `(i1, i2, inc)` for a span, where ticks are
/// `i * inc` (or `i / -inc` for sub-unit steps). `None` when no tick fits.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let inc = tick_increment(start, stop, count);
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }

    let (i1, i2, inc) = if inc < 0.0 {
        let inv = -inc;
        let mut i1 = (start * inv).round() as i64;
        let mut i2 = (stop * inv).round() as i64;
        if (i1 as f64) / inv < start {
            i1 += 1;
        }
        if (i2 as f64) / inv > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    } else {
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Tick positions for `[start, stop]` targeting `count` ticks (d3 `ticks`).
pub fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (a, b) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(a, b, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1 + 1) as usize;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let idx = if reverse { i2 - i as i64 } else { i1 + i as i64 };
        out.push(if inc < 0.0 {
            idx as f64 / -inc
        } else {
            idx as f64 * inc
        });
    }
    out
}
