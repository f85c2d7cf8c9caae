//! Inequality Metrics
//!
//! Summary statistics for a wealth cross-section. All functions treat the
//! input as an unordered population and never mutate it.
//!
//! ## Metrics
//! - Lorenz curve (cumulative population share vs cumulative wealth share)
//! - Gini coefficient
//! - Top wealth shares (top 10%, top 1%)

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LorenzCurve {
    pub population_share: Vec<f64>,
    pub wealth_share: Vec<f64>,
}

impl LorenzCurve {
    pub fn len(&self) -> usize {
        self.population_share.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population_share.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.population_share
            .iter()
            .copied()
            .zip(self.wealth_share.iter().copied())
    }
}

fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Lorenz curve of `values`: `n + 1` points from (0, 0) to (1, 1).
///
/// An empty population, or one holding no wealth at all, yields the line
/// of equality.
pub fn lorenz_curve(values: &[f64]) -> LorenzCurve {
    let n = values.len();
    if n == 0 {
        return LorenzCurve {
            population_share: vec![0.0, 1.0],
            wealth_share: vec![0.0, 1.0],
        };
    }

    let sorted = sorted_ascending(values);
    let total: f64 = sorted.iter().sum();

    let mut population_share = Vec::with_capacity(n + 1);
    let mut wealth_share = Vec::with_capacity(n + 1);
    population_share.push(0.0);
    wealth_share.push(0.0);

    let mut cumulative = 0.0;
    for (i, w) in sorted.iter().enumerate() {
        cumulative += w;
        let pop = (i + 1) as f64 / n as f64;
        population_share.push(pop);
        wealth_share.push(if total > 0.0 { cumulative / total } else { pop });
    }

    // Pin the endpoint against accumulated rounding.
    wealth_share[n] = 1.0;

    LorenzCurve {
        population_share,
        wealth_share,
    }
}

/// Gini coefficient: `sum_i sum_j |w_i - w_j| / (2 n sum_i w_i)`.
///
/// Computed on the sorted sample in O(n log n). Returns 0 for an empty
/// population or one with zero total wealth.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let sorted = sorted_ascending(values);
    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    // Pairwise differences are shift invariant; measuring from the minimum
    // keeps an equal population at exactly zero.
    let min = sorted[0];
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, w)| (2.0 * (i + 1) as f64 - n as f64 - 1.0) * (w - min))
        .sum();

    weighted / (n as f64 * total)
}

/// Share of total wealth held by the richest `fraction` of the population.
/// The top group is `round(fraction * n)` agents.
pub fn top_share(values: &[f64], fraction: f64) -> f64 {
    let n = values.len();
    let total: f64 = values.iter().sum();
    if n == 0 || total <= 0.0 {
        return 0.0;
    }

    let k = ((fraction.clamp(0.0, 1.0) * n as f64).round() as usize).min(n);
    let sorted = sorted_ascending(values);
    let top: f64 = sorted[n - k..].iter().sum();
    top / total
}

fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InequalitySummary {
    pub households: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub gini: f64,
    pub top_10_share: f64,
    pub top_1_share: f64,
}

impl InequalitySummary {
    pub fn from_cross_section(values: &[f64]) -> Self {
        let sorted = sorted_ascending(values);
        let n = sorted.len();
        let mean = if n > 0 {
            sorted.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };

        Self {
            households: n,
            mean,
            median: median(&sorted),
            min: sorted.first().copied().unwrap_or(0.0),
            max: sorted.last().copied().unwrap_or(0.0),
            gini: gini_coefficient(&sorted),
            top_10_share: top_share(&sorted, 0.10),
            top_1_share: top_share(&sorted, 0.01),
        }
    }

    pub fn print(&self) {
        println!("  Households:              {}", self.households);
        println!("  Mean wealth:             {:.3}", self.mean);
        println!("  Median wealth:           {:.3}", self.median);
        println!("  Min / Max wealth:        {:.3} / {:.3}", self.min, self.max);
        println!("  Gini coefficient:        {:.4}", self.gini);
        println!("  Top 10% share:           {:.2}%", self.top_10_share * 100.0);
        println!("  Top 1% share:            {:.2}%", self.top_1_share * 100.0);
    }
}
