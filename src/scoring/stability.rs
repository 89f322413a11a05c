use crate::joints::AngleMap;
use serde::Serialize;

/// Population statistics of one angle's history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    pub samples: usize,
    pub mean: f32,
    pub std_dev: f32,
}

/// Population mean and standard deviation of `series`.
pub fn series_stats(series: &[f32]) -> SeriesStats {
    if series.is_empty() {
        return SeriesStats::default();
    }
    let n = series.len() as f32;
    let mean = series.iter().sum::<f32>() / n;
    let variance = series.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
    SeriesStats {
        samples: series.len(),
        mean,
        std_dev: variance.sqrt(),
    }
}

/// Steadiness of one angle over a hold, in [0, 1].
///
/// Fewer than two samples carry no variance information and count as
/// perfectly stable. Otherwise the population standard deviation decays
/// linearly to zero at `std_cap_deg`.
pub fn stability(series: &[f32], std_cap_deg: f32) -> f32 {
    if series.len() < 2 {
        return 1.0;
    }
    let std_dev = series_stats(series).std_dev;
    if std_cap_deg <= 0.0 {
        return if std_dev == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - std_dev / std_cap_deg).max(0.0)
}

/// Mean of the per-angle stabilities of `history`.
///
/// Each angle is assessed on its own series; the series are never pooled.
/// An empty history is stable by the same rule as a short series.
pub fn mean_stability(history: &AngleMap<Vec<f32>>, std_cap_deg: f32) -> f32 {
    let (sum, count) = history
        .iter()
        .map(|(_, series)| stability(series, std_cap_deg))
        .fold((0.0f32, 0usize), |(sum, count), s| (sum + s, count + 1));
    if count == 0 {
        1.0
    } else {
        sum / count as f32
    }
}
