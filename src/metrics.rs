use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub rtp: f64,
    pub hit_rate: f64,
    /// Sample standard deviation of per-spin wins.
    pub volatility: f64,
}

/// Reduces per-spin wins at a flat bet into RTP, hit rate and volatility.
///
/// Every ratio falls back to 0 instead of dividing by zero: no spins, a zero
/// bet, or a single spin (for volatility).
pub fn compute_metrics(wins: &[f64], bet_per_spin: f64) -> Metrics {
    let mut acc = MetricsAccumulator::default();
    for &w in wins {
        acc.push(w);
    }
    acc.finish(bet_per_spin)
}

/// Single-pass form of [`compute_metrics`] (Welford's update for the
/// variance), so a simulation never has to keep its wins in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsAccumulator {
    spins: usize,
    hits: usize,
    total: f64,
    mean: f64,
    m2: f64,
}

impl MetricsAccumulator {
    #[inline]
    pub fn push(&mut self, win: f64) {
        self.spins += 1;
        if win > 0.0 {
            self.hits += 1;
        }
        self.total += win;
        let delta = win - self.mean;
        self.mean += delta / self.spins as f64;
        self.m2 += delta * (win - self.mean);
    }

    pub fn spins(&self) -> usize {
        self.spins
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn finish(&self, bet_per_spin: f64) -> Metrics {
        if self.spins == 0 {
            return Metrics::default();
        }
        let n = self.spins as f64;

        let rtp = if bet_per_spin == 0.0 {
            0.0
        } else {
            self.total / (bet_per_spin * n)
        };

        let volatility = if self.spins <= 1 {
            0.0
        } else {
            (self.m2.max(0.0) / (n - 1.0)).sqrt()
        };

        Metrics {
            rtp,
            hit_rate: self.hits as f64 / n,
            volatility,
        }
    }
}
