use crate::domain::model::TwoSatInstance;
use crate::domain::traits::AssignmentSearch;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Papadimitriou's randomized local search for 2-SAT.
///
/// Each trial starts from a uniformly random assignment and performs up to
/// `2n²` flips, each flipping a random variable of a random unsatisfied
/// clause. A returned assignment satisfies every clause; `None` means no
/// trial succeeded, or the instance names a literal out of range or is too
/// large for the flip budget to be counted.
#[derive(Debug, Clone, Copy)]
pub struct PapadimitriouSearch {
    pub seed: u64,
    /// Overrides the default `ceil(log2 n)` trial count.
    pub trials: Option<usize>,
}

impl PapadimitriouSearch {
    pub fn new(seed: u64) -> Self {
        Self { seed, trials: None }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    fn trial_count(&self, variables: usize) -> usize {
        self.trials
            .unwrap_or_else(|| (variables as f64).log2().ceil() as usize)
            .max(1)
    }
}

impl AssignmentSearch for PapadimitriouSearch {
    fn search(&self, instance: &TwoSatInstance) -> Option<Vec<bool>> {
        let n = instance.variables;
        let in_range = instance
            .clauses
            .iter()
            .flat_map(|c| c.literals())
            .all(|lit| lit != 0 && lit.unsigned_abs() as usize <= n);
        if !in_range {
            return None;
        }

        let max_flips = n.checked_mul(n).and_then(|sq| sq.checked_mul(2))?;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);

        for _ in 0..self.trial_count(n) {
            let mut assignment: Vec<bool> = (0..n).map(|_| rng.gen()).collect();

            for flip in 0..=max_flips {
                let unsatisfied = instance.unsatisfied_clauses(&assignment);
                if unsatisfied.is_empty() {
                    return Some(assignment);
                }
                if flip == max_flips {
                    break;
                }

                let clause = instance.clauses[unsatisfied[rng.gen_range(0..unsatisfied.len())]];
                let literal = clause.literals()[rng.gen_range(0..2)];
                let var = literal.unsigned_abs() as usize - 1;
                assignment[var] = !assignment[var];
            }
        }

        None
    }
}
