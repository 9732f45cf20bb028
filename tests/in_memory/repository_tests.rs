//! In-memory repository contract tests.

use chrono::TimeDelta;
use helpdesk::task::{
    adapters::{
        fixture::{SEED_TASK_COUNT, seed_task_id, seed_tasks},
        memory::InMemoryTaskRepository,
    },
    domain::{CompletionPolicy, StatusChange, TaskStatus, transition},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::rstest;

use super::helpers::{anchor, ids};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order() -> eyre::Result<()> {
    let repository = InMemoryTaskRepository::with_tasks(seed_tasks(anchor()));

    let listed = repository.list().await?;

    let expected: Vec<_> = (1..=8).map(seed_task_id).collect();
    eyre::ensure!(ids(&listed) == expected, "seed order not preserved");
    eyre::ensure!(listed.len() == SEED_TASK_COUNT);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn with_tasks_drops_later_duplicates() -> eyre::Result<()> {
    let seeds = seed_tasks(anchor());
    let doubled = seeds.iter().chain(seeds.iter()).cloned();

    let repository = InMemoryTaskRepository::with_tasks(doubled);

    eyre::ensure!(repository.list().await?.len() == SEED_TASK_COUNT);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier() -> eyre::Result<()> {
    let seeds = seed_tasks(anchor());
    let repository = InMemoryTaskRepository::with_tasks(seeds.clone());
    let Some(first) = seeds.first() else {
        eyre::bail!("seed collection is empty");
    };

    let result = repository.store(first).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == first.id()),
        "expected duplicate error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_in_place() -> eyre::Result<()> {
    let repository = InMemoryTaskRepository::with_tasks(seed_tasks(anchor()));
    let Some(stored) = repository.find_by_id(seed_task_id(3)).await? else {
        eyre::bail!("seed task 3 missing");
    };
    let reopened = transition(
        &stored,
        StatusChange::new(TaskStatus::Pending, "Ana Souza", anchor()),
        CompletionPolicy::Preserve,
    );

    repository.update(&reopened).await?;

    let listed = repository.list().await?;
    eyre::ensure!(listed.get(2) == Some(&reopened), "task moved or not replaced");
    eyre::ensure!(listed.len() == SEED_TASK_COUNT);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_fails() -> eyre::Result<()> {
    let repository = InMemoryTaskRepository::new();
    let seeds = seed_tasks(anchor());
    let Some(task) = seeds.first() else {
        eyre::bail!("seed collection is empty");
    };

    let result = repository.update(task).await;

    eyre::ensure!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_status_change_appends_in_place() -> eyre::Result<()> {
    let repository = InMemoryTaskRepository::with_tasks(seed_tasks(anchor()));

    let updated = repository
        .apply_status_change(
            seed_task_id(2),
            StatusChange::new(TaskStatus::Completed, "Ana Souza", anchor()),
            CompletionPolicy::Preserve,
        )
        .await?;

    let listed = repository.list().await?;
    eyre::ensure!(listed.get(1) == Some(&updated), "task moved or not replaced");
    eyre::ensure!(updated.history().len() == 2);
    eyre::ensure!(updated.completed_at() == Some(anchor()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_status_change_of_unknown_task_fails() {
    let repository = InMemoryTaskRepository::new();
    let missing = seed_task_id(1);

    let result = repository
        .apply_status_change(
            missing,
            StatusChange::new(TaskStatus::Completed, "Ana Souza", anchor()),
            CompletionPolicy::Preserve,
        )
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
}

#[rstest]
fn seeds_walk_their_status_paths() -> eyre::Result<()> {
    let now = anchor();
    let seeds = seed_tasks(now);

    let Some(completed) = seeds.iter().find(|task| task.id() == seed_task_id(3)) else {
        eyre::bail!("seed task 3 missing");
    };
    eyre::ensure!(completed.status() == TaskStatus::Completed);
    eyre::ensure!(completed.history().len() == 2);
    eyre::ensure!(completed.completed_at() == Some(completed.updated_at()));
    eyre::ensure!(completed.created_at() == now - TimeDelta::days(10));

    let untouched = seeds
        .iter()
        .filter(|task| task.history().is_empty())
        .all(|task| task.status() == TaskStatus::Pending && task.created_at() == task.updated_at());
    eyre::ensure!(untouched, "tasks without history must be pending and unmodified");
    Ok(())
}
