mod common;
use common::fake_gateway::{ts, FakeGateway};
use grecent::core::{error::GrecentError, rank_branches};

#[cfg(test)]
mod recency_tests {
    use super::*;

    fn names(gateway: &FakeGateway) -> anyhow::Result<Vec<String>> {
        Ok(rank_branches(gateway)?
            .iter()
            .map(|record| record.name.clone())
            .collect())
    }

    #[test]
    fn test_local_work_on_older_branch_ranks_it_first() -> anyhow::Result<()> {
        let gateway = FakeGateway::new()
            .branch("main", "2024-01-01T00:00:00Z")
            .branch_with(
                "feature",
                Some(ts("2023-06-01T00:00:00Z")),
                Some("refs/remotes/origin/feature"),
            )
            .reflog("feature", "2024-06-01T00:00:00Z")
            .remote("origin/feature", "2024-05-01T00:00:00Z")
            .current("main");

        let snapshot = rank_branches(&gateway)?;
        assert_eq!(snapshot[0].name, "feature");
        assert_eq!(snapshot[0].activity_time, ts("2024-06-01T00:00:00Z"));
        assert!(snapshot[0].has_upstream);
        assert!(!snapshot[0].is_current);

        assert_eq!(snapshot[1].name, "main");
        assert!(snapshot[1].is_current);
        assert!(!snapshot[1].has_upstream);
        Ok(())
    }

    #[test]
    fn test_upstream_tip_counts_when_newest() -> anyhow::Result<()> {
        let gateway = FakeGateway::new()
            .branch("main", "2024-03-01T00:00:00Z")
            .branch_with(
                "shared",
                Some(ts("2024-01-01T00:00:00Z")),
                Some("refs/remotes/origin/shared"),
            )
            .remote("origin/shared", "2024-04-01T00:00:00Z");

        let snapshot = rank_branches(&gateway)?;
        assert_eq!(snapshot[0].name, "shared");
        assert_eq!(snapshot[0].activity_time, ts("2024-04-01T00:00:00Z"));
        Ok(())
    }

    #[test]
    fn test_upstream_never_fetched_is_absent_but_flagged() -> anyhow::Result<()> {
        let gateway = FakeGateway::new().branch_with(
            "topic",
            Some(ts("2024-02-01T00:00:00Z")),
            Some("refs/remotes/origin/topic"),
        );

        let snapshot = rank_branches(&gateway)?;
        assert_eq!(snapshot[0].activity_time, ts("2024-02-01T00:00:00Z"));
        assert!(snapshot[0].has_upstream);
        Ok(())
    }

    #[test]
    fn test_equal_times_keep_gateway_order() -> anyhow::Result<()> {
        let gateway = FakeGateway::new()
            .branch("zeta", "2024-01-01T00:00:00Z")
            .branch("alpha", "2024-01-01T00:00:00Z")
            .branch("mid", "2024-01-01T00:00:00Z");

        assert_eq!(names(&gateway)?, vec!["zeta", "alpha", "mid"]);
        Ok(())
    }

    #[test]
    fn test_reflog_alone_is_enough() -> anyhow::Result<()> {
        let gateway = FakeGateway::new()
            .branch_with("orphan", None, None)
            .reflog("orphan", "2024-01-01T00:00:00Z");

        let snapshot = rank_branches(&gateway)?;
        assert_eq!(snapshot[0].activity_time, ts("2024-01-01T00:00:00Z"));
        Ok(())
    }

    #[test]
    fn test_branch_without_any_time_fails_the_ranking() {
        let gateway = FakeGateway::new()
            .branch("main", "2024-01-01T00:00:00Z")
            .branch_with("ghost", None, None);

        let err = rank_branches(&gateway).unwrap_err();
        assert!(matches!(err, GrecentError::UnreadableTimestamp { ref branch } if branch == "ghost"));
        assert_eq!(err.to_string(), "parse date for ghost: no readable timestamp");
    }

    #[test]
    fn test_empty_repository_gives_empty_snapshot() -> anyhow::Result<()> {
        let snapshot = rank_branches(&FakeGateway::new())?;
        assert!(snapshot.is_empty());
        assert!(snapshot.current().is_none());
        Ok(())
    }

    #[test]
    fn test_listing_failure_is_propagated() {
        let gateway = FakeGateway::new().branch("main", "2024-01-01T00:00:00Z");
        gateway.fail_listing(Some("fatal: bad object"));
        assert!(rank_branches(&gateway).is_err());
    }
}
