use crate::graph::ScheduleDag;

/// Earliest start/finish sweep in ascending registry order.
pub struct ForwardPass<'a> {
    dag: &'a ScheduleDag,
}

impl<'a> ForwardPass<'a> {
    pub fn new(dag: &'a ScheduleDag) -> Self {
        Self { dag }
    }

    /// Returns `(early_start, early_finish)` per activity index.
    pub fn execute(&self) -> Vec<(i64, i64)> {
        let mut results: Vec<(i64, i64)> = Vec::with_capacity(self.dag.len());

        for idx in 0..self.dag.len() {
            // Predecessors always have a smaller index, so their finish is final here.
            let early_start = self
                .dag
                .predecessors(idx)
                .map(|pred| results[pred].1)
                .max()
                .unwrap_or(0);
            // In range: the registry only accepts activities whose finish fits in i64.
            let early_finish = early_start + self.dag.durations[idx];
            results.push((early_start, early_finish));
        }

        results
    }
}
