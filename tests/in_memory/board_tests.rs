//! Board queries over the seed collection.

use helpdesk::task::{
    adapters::fixture::seed_task_id,
    domain::{DashboardMetrics, TaskStatus, TaskType},
    query::{Selection, SortKey, SortSpec, TaskFilter},
    services::ChangeStatusRequest,
    view::{TaskListAction, TaskListView},
};
use rstest::rstest;

use super::helpers::{TestBoard, TestService, ids, services};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_reflects_seed_collection(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (_, board) = services;

    let snapshot = board.dashboard().await?;

    eyre::ensure!(
        snapshot.metrics
            == DashboardMetrics {
                pending: 4,
                in_progress: 2,
                completed: 1,
                cancelled: 1,
                urgent: 3,
                total: 8,
            },
        "unexpected metrics {:?}",
        snapshot.metrics
    );
    eyre::ensure!(
        ids(&snapshot.urgent) == vec![seed_task_id(2), seed_task_id(8), seed_task_id(4)],
        "urgent list out of order"
    );
    eyre::ensure!(
        ids(&snapshot.recent)
            == vec![
                seed_task_id(4),
                seed_task_id(2),
                seed_task_id(1),
                seed_task_id(6),
                seed_task_id(8),
            ],
        "recent list out of order"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_urgent_task_updates_dashboard(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (lifecycle, board) = services;

    lifecycle
        .change_status(ChangeStatusRequest::to_status(
            seed_task_id(2),
            TaskStatus::Completed,
        ))
        .await?;
    let snapshot = board.dashboard().await?;

    eyre::ensure!(snapshot.metrics.in_progress == 1);
    eyre::ensure!(snapshot.metrics.completed == 2);
    eyre::ensure!(snapshot.metrics.urgent == 3, "urgent counts every status");
    eyre::ensure!(ids(&snapshot.urgent) == vec![seed_task_id(8), seed_task_id(4)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_finds_laboratory_tasks(services: (TestService, TestBoard)) -> eyre::Result<()> {
    let (_, board) = services;

    let found = board
        .list_tasks(
            &TaskFilter::default().with_search("laboratório"),
            SortSpec::newest_first(),
        )
        .await?;

    eyre::ensure!(ids(&found) == vec![seed_task_id(1), seed_task_id(7)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_view_applies_page_selections(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (_, board) = services;
    let view = TaskListView::default()
        .apply(TaskListAction::Loaded)
        .apply(TaskListAction::FilterType(Selection::Only(TaskType::Network)))
        .apply(TaskListAction::SortBy(SortKey::DueDate))
        .apply(TaskListAction::SortBy(SortKey::DueDate));

    let rows = board.list_view(&view).await?;

    eyre::ensure!(ids(&rows) == vec![seed_task_id(2), seed_task_id(6)]);
    Ok(())
}
