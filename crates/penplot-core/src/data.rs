use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Series key used when single-value rows are composed as a one-series chart.
pub const VALUE_SERIES_KEY: &str = "value";

/// One row of single-value chart data (bar, pie): a category label plus a
/// magnitude. Duplicate names are not rejected; they produce overlapping
/// bands downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One row of multi-series chart data (line, radar): an x label plus one
/// value per series key.
///
/// The map preserves JSON insertion order, but composition orders series by
/// [`ChartData::series_keys`], not by map order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub series: IndexMap<String, f64>,
}

impl SeriesPoint {
    pub fn new<K: Into<String>>(
        x: impl Into<String>,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            x: x.into(),
            series: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Value for one series key. Missing keys yield NaN, which downstream
    /// geometry prints as degenerate coordinates rather than failing.
    pub fn value(&self, key: &str) -> f64 {
        self.series.get(key).copied().unwrap_or(f64::NAN)
    }
}

/// First-row series keys, sorted lexically. Standalone so slice-based
/// callers share the rule with [`ChartData::series_keys`].
pub fn series_keys_of(rows: &[SeriesPoint]) -> Vec<String> {
    let mut keys: Vec<String> = rows
        .first()
        .map(|row| row.series.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

/// A chart payload as posted by the plugin UI: either single-value rows or
/// multi-series rows. Untagged; the row shape selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Points(Vec<DataPoint>),
    Series(Vec<SeriesPoint>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Points(rows) => rows.len(),
            ChartData::Series(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Series keys for multi-series composition: the first row's key set,
    /// sorted lexically. Later rows contribute values only; keys they add are
    /// ignored and keys they miss plot as NaN. Single-value rows expose one
    /// implicit [`VALUE_SERIES_KEY`] series.
    pub fn series_keys(&self) -> Vec<String> {
        match self {
            ChartData::Points(rows) => {
                if rows.is_empty() {
                    Vec::new()
                } else {
                    vec![VALUE_SERIES_KEY.to_string()]
                }
            }
            ChartData::Series(rows) => series_keys_of(rows),
        }
    }

    /// Rows in single-value form (bar, pie). Multi-series rows degrade to the
    /// sum of their series values.
    pub fn value_rows(&self) -> Cow<'_, [DataPoint]> {
        match self {
            ChartData::Points(rows) => Cow::Borrowed(rows),
            ChartData::Series(rows) => Cow::Owned(
                rows.iter()
                    .map(|row| DataPoint {
                        name: row.x.clone(),
                        value: row.series.values().sum(),
                    })
                    .collect(),
            ),
        }
    }

    /// Rows in multi-series form (line, radar). Single-value rows become a
    /// one-key series.
    pub fn series_rows(&self) -> Cow<'_, [SeriesPoint]> {
        match self {
            ChartData::Series(rows) => Cow::Borrowed(rows),
            ChartData::Points(rows) => Cow::Owned(
                rows.iter()
                    .map(|row| {
                        SeriesPoint::new(row.name.clone(), [(VALUE_SERIES_KEY, row.value)])
                    })
                    .collect(),
            ),
        }
    }
}
