mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::InMemorySearch;
use issue_roulette::services::partition_randomly;
use issue_roulette::{Assignee, IssueSource};
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    /// Property: every assignee gets exactly k distinct issues from the pool
    #[test]
    fn prop_partition_is_fair_and_disjoint(
        assignee_count in 1usize..8,
        per_assignee in 1usize..6,
        spare in 0u64..20,
    ) {
        let needed = (assignee_count * per_assignee) as u64;
        let pool = common::issues(needed + spare);
        let assignees: Vec<Assignee> = (0..assignee_count)
            .map(|i| Assignee::new(format!("person-{i}")))
            .collect();

        let assignments = partition_randomly(&pool, &assignees, per_assignee).unwrap();

        prop_assert_eq!(assignments.len() as u64, needed);
        for assignee in &assignees {
            let count = assignments.iter().filter(|a| &a.assignee == assignee).count();
            prop_assert_eq!(count, per_assignee);
        }
        let distinct: HashSet<u64> = assignments.iter().map(|a| a.issue.number).collect();
        prop_assert_eq!(distinct.len() as u64, needed);
        for assignment in &assignments {
            prop_assert!(pool.contains(&assignment.issue));
        }
    }

    /// Property: an unbounded fetch returns every issue once, in source order
    #[test]
    fn prop_unbounded_fetch_returns_everything(
        total in 0u64..400,
        page_size in 1u32..=100,
    ) {
        let all = common::issues(total);
        let search = Arc::new(InMemorySearch::new(all.clone()));
        let source = IssueSource::new(search.clone(), "q").with_page_size(page_size);

        let fetched = block_on(source.fetch_oldest(None)).unwrap();

        prop_assert_eq!(&fetched, &all);
        prop_assert!(fetched.windows(2).all(|w| w[0].updated_at <= w[1].updated_at));
        let expected_calls = total / u64::from(page_size) + 1;
        prop_assert_eq!(search.pages().len() as u64, expected_calls);
    }

    /// Property: a bounded fetch is the prefix of the unbounded one
    #[test]
    fn prop_bounded_fetch_is_prefix(
        total in 0u64..400,
        page_size in 1u32..=100,
        max_wanted in 1usize..500,
    ) {
        let all = common::issues(total);
        let search = Arc::new(InMemorySearch::new(all.clone()));
        let source = IssueSource::new(search, "q").with_page_size(page_size);

        let fetched = block_on(source.fetch_oldest(Some(max_wanted))).unwrap();

        let expected = max_wanted.min(all.len());
        prop_assert_eq!(fetched.len(), expected);
        prop_assert_eq!(&fetched[..], &all[..expected]);
    }
}
