use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) road network.
    /// The `G(n,p)` contains n cities named `c0` to `c{n-1}` and each of the `n(n-1)/2`
    /// roads exists independently with probability `p`. Road lengths are drawn
    /// uniformly from `1..=max_weight`.
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, max_weight: Weight) -> Self;
}

impl GnpGenerator for CityGraph {
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, max_weight: Weight) -> Self {
        let mut result = CityGraph::new();
        for u in 0..n {
            result.add_vertex(&format!("c{u}"));
        }

        // indirection via vector as we need a &mut for rng and the weights also need rng
        let pairs: Vec<_> = BernoulliSamplingRange::new(rng, 0, (n as i64) * (n as i64), p)
            .filter_map(|x| {
                let u = x / (n as i64);
                let v = x % (n as i64);
                (u < v).then_some((u as Node, v as Node))
            })
            .collect();

        for (u, v) in pairs {
            let w = rng.gen_range(1..=max_weight.max(1));
            result.add_edge(u, v, w);
        }

        result
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    /// Probabilities outside of `[0, 1]` yield an empty range
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        Self {
            rng,
            current: begin - 1,
            end,
            distr: Geometric::new(prob).ok(),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}
