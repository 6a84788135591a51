use crate::graph::ScheduleDag;

/// Latest start/finish sweep in descending registry order.
pub struct BackwardPass<'a> {
    dag: &'a ScheduleDag,
}

impl<'a> BackwardPass<'a> {
    pub fn new(dag: &'a ScheduleDag) -> Self {
        Self { dag }
    }

    /// Returns `(late_start, late_finish)` per activity index.
    pub fn execute(&self, project_finish: i64) -> Vec<(i64, i64)> {
        let successors = self.dag.reverse_adjacency();
        let mut results: Vec<(i64, i64)> = vec![(0, 0); self.dag.len()];

        for idx in (0..self.dag.len()).rev() {
            // Activities without successors must finish by the project end.
            let late_finish = successors[idx]
                .iter()
                .map(|&succ| results[succ].0)
                .min()
                .unwrap_or(project_finish);
            let late_start = late_finish - self.dag.durations[idx];
            results[idx] = (late_start, late_finish);
        }

        results
    }
}
