//! Then steps for task status change BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use helpdesk::task::{domain::TaskStatus, services::TaskLifecycleError};
use rstest_bdd_macros::then;

fn parse_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world.task()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task_id = world.task()?.id();
    let stored = run_async(world.service.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from repository"))?;
    eyre::ensure!(
        stored.status() == expected,
        "expected stored status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the task history has {count:usize} entry")]
fn history_has_one_entry(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    history_has_entries(world, count)
}

#[then("the task history has {count:usize} entries")]
fn history_has_entries(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.task()?.history().len();
    eyre::ensure!(found == count, "expected {count} history entries, found {found}");
    Ok(())
}

#[then(r#"the latest history entry was performed by "{actor}""#)]
fn latest_entry_performed_by(world: &TaskStatusWorld, actor: String) -> Result<(), eyre::Report> {
    let entry = world
        .task()?
        .history()
        .last()
        .ok_or_else(|| eyre::eyre!("task has no history"))?;
    eyre::ensure!(
        entry.performed_by() == actor,
        "expected actor {actor}, found {}",
        entry.performed_by()
    );
    Ok(())
}

#[then("the task has a completion time")]
fn task_has_completion_time(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.task()?.completed_at().is_some(),
        "completion time should be set"
    );
    Ok(())
}

#[then("the change fails with an invalid status error")]
fn change_fails_with_invalid_status(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::InvalidStatus(_))),
        "expected InvalidStatus error, got {result:?}"
    );
    Ok(())
}

#[then("the change fails with a task not found error")]
fn change_fails_with_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::NotFound(_))),
        "expected NotFound error, got {result:?}"
    );
    Ok(())
}
