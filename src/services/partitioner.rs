//! Random fair-share split of an issue pool across assignees.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Assignee, Assignment, Issue};

/// Shuffle `issues` with `rng` and deal `per_assignee` of them to each assignee.
///
/// Assignees are served in list order, each taking the next `per_assignee`
/// issues from the front of the shuffled pool. Issues are drawn without
/// replacement; whatever is left over is dropped. The result is grouped by
/// assignee.
pub fn partition<R: Rng + ?Sized>(
    issues: &[Issue],
    assignees: &[Assignee],
    per_assignee: usize,
    rng: &mut R,
) -> DomainResult<Vec<Assignment>> {
    let needed = assignees.len().saturating_mul(per_assignee);
    if needed > issues.len() {
        return Err(DomainError::ValidationFailed(format!(
            "cannot deal {per_assignee} issue(s) to {} assignee(s) from a pool of {}",
            assignees.len(),
            issues.len()
        )));
    }

    let mut pool = issues.to_vec();
    pool.shuffle(rng);

    let mut pool = pool.into_iter();
    let mut assignments = Vec::with_capacity(needed);
    for assignee in assignees {
        assignments.extend(
            pool.by_ref()
                .take(per_assignee)
                .map(|issue| Assignment::new(assignee.clone(), issue)),
        );
    }

    Ok(assignments)
}

/// [`partition`] using the thread-local RNG, so no two runs share a seed.
pub fn partition_randomly(
    issues: &[Issue],
    assignees: &[Assignee],
    per_assignee: usize,
) -> DomainResult<Vec<Assignment>> {
    partition(issues, assignees, per_assignee, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(count: u64) -> Vec<Issue> {
        (1..=count)
            .map(|n| Issue {
                number: n,
                title: format!("Issue {n}"),
                html_url: format!("https://github.com/o/r/issues/{n}"),
                updated_at: Utc::now(),
            })
            .collect()
    }

    fn assignees(names: &[&str]) -> Vec<Assignee> {
        names.iter().copied().map(Assignee::from).collect()
    }

    #[test]
    fn test_each_assignee_gets_k_distinct_issues() {
        let issues = pool(10);
        let people = assignees(&["alice", "bob", "carol"]);
        let mut rng = StdRng::seed_from_u64(7);

        let assignments = partition(&issues, &people, 3, &mut rng).unwrap();

        assert_eq!(assignments.len(), 9);
        for person in &people {
            assert_eq!(assignments.iter().filter(|a| &a.assignee == person).count(), 3);
        }
        let numbers: HashSet<u64> = assignments.iter().map(|a| a.issue.number).collect();
        assert_eq!(numbers.len(), 9);
        assert!(numbers.iter().all(|n| (1..=10).contains(n)));
    }

    #[test]
    fn test_grouped_in_assignee_order() {
        let issues = pool(4);
        let people = assignees(&["bob", "alice"]);
        let mut rng = StdRng::seed_from_u64(1);

        let assignments = partition(&issues, &people, 2, &mut rng).unwrap();

        let order: Vec<&str> = assignments.iter().map(|a| a.assignee.as_str()).collect();
        assert_eq!(order, vec!["bob", "bob", "alice", "alice"]);
    }

    #[test]
    fn test_same_seed_same_partition() {
        let issues = pool(20);
        let people = assignees(&["a", "b"]);

        let first = partition(&issues, &people, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = partition(&issues, &people, 4, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_too_small_pool_is_rejected() {
        let issues = pool(3);
        let people = assignees(&["a", "b"]);

        let result = partition_randomly(&issues, &people, 2);

        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    }

    #[test]
    fn test_no_assignees_yields_nothing() {
        let assignments = partition_randomly(&pool(5), &[], 2).unwrap();
        assert!(assignments.is_empty());
    }

    #[test]
    fn test_every_issue_can_be_picked() {
        let issues = pool(5);
        let people = assignees(&["solo"]);
        let mut seen = HashSet::new();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for a in partition(&issues, &people, 1, &mut rng).unwrap() {
                seen.insert(a.issue.number);
            }
        }

        assert_eq!(seen.len(), 5);
    }
}
