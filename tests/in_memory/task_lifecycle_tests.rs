//! In-memory integration tests for task creation and status changes.

use chrono::TimeDelta;
use helpdesk::task::{
    adapters::fixture::seed_task_id,
    domain::{TaskPriority, TaskStatus, TaskType},
    query::{SortSpec, TaskFilter},
    services::{ChangeStatusRequest, CreateTaskRequest, TaskLifecycleError},
};
use rstest::rstest;

use super::helpers::{TestBoard, TestService, anchor, services};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_first_in_default_listing(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (lifecycle, board) = services;
    let request = CreateTaskRequest::new(
        "Projetor sem imagem",
        "Projetor do auditório não liga",
        TaskType::Hardware,
        TaskPriority::High,
        "Diego Rocha",
        "Auditório",
    )
    .with_due_date(anchor() + TimeDelta::days(1));

    let created = lifecycle.create_task(request).await?;
    let listed = board
        .list_tasks(&TaskFilter::default(), SortSpec::newest_first())
        .await?;

    eyre::ensure!(listed.len() == 9);
    eyre::ensure!(listed.first().map(|task| task.id()) == Some(created.id()));
    eyre::ensure!(board.metrics().await?.pending == 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_task_can_be_reopened(services: (TestService, TestBoard)) -> eyre::Result<()> {
    let (lifecycle, _) = services;

    let reopened = lifecycle
        .change_status(
            ChangeStatusRequest::new(seed_task_id(7), "pending").performed_by("Bruno Lima"),
        )
        .await?;

    eyre::ensure!(reopened.status() == TaskStatus::Pending);
    eyre::ensure!(reopened.history().len() == 2);
    let Some(entry) = reopened.history().last() else {
        eyre::bail!("history entry missing");
    };
    eyre::ensure!(entry.description() == "from cancelled to pending");
    eyre::ensure!(entry.performed_by() == "Bruno Lima");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_completed_seed_keeps_completion_time(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (lifecycle, _) = services;
    let Some(before) = lifecycle.find_by_id(seed_task_id(3)).await? else {
        eyre::bail!("seed task 3 missing");
    };

    let reopened = lifecycle
        .change_status(ChangeStatusRequest::to_status(
            seed_task_id(3),
            TaskStatus::InProgress,
        ))
        .await?;

    eyre::ensure!(reopened.completed_at().is_some());
    eyre::ensure!(reopened.completed_at() == before.completed_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_status_leaves_task_unchanged(
    services: (TestService, TestBoard),
) -> eyre::Result<()> {
    let (lifecycle, _) = services;
    let before = lifecycle.find_by_id(seed_task_id(1)).await?;

    let result = lifecycle
        .change_status(ChangeStatusRequest::new(seed_task_id(1), "done"))
        .await;

    eyre::ensure!(matches!(result, Err(TaskLifecycleError::InvalidStatus(_))));
    eyre::ensure!(lifecycle.find_by_id(seed_task_id(1)).await? == before);
    Ok(())
}
