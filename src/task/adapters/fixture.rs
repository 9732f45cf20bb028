//! Seed task collection standing in for a real helpdesk backend.
//!
//! Timestamps are relative to the supplied `now` so the dashboard always has
//! upcoming deadlines and recent activity.

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::task::domain::{
    HistoryId, PersistedTaskData, Task, TaskHistory, TaskId, TaskPriority, TaskStatus, TaskType,
};

/// Number of tasks returned by [`seed_tasks`].
pub const SEED_TASK_COUNT: usize = 8;

/// Name used on seeded history records.
const SEED_ACTOR: &str = "Carlos Silva";

/// Returns the identifier of the `index`-th seeded task (1-based).
#[must_use]
pub const fn seed_task_id(index: u16) -> TaskId {
    TaskId::from_uuid(Uuid::from_u128(0x5eed_0000 + index as u128))
}

const fn seed_history_id(task: u16, entry: u16) -> HistoryId {
    HistoryId::from_uuid(Uuid::from_u128(
        0x4157_0000_0000 + ((task as u128) << 16) + entry as u128,
    ))
}

struct Seed {
    index: u16,
    title: &'static str,
    description: &'static str,
    priority: TaskPriority,
    task_type: TaskType,
    assigned_to: &'static str,
    computer_id: Option<&'static str>,
    location: &'static str,
    created: TimeDelta,
    due_in: Option<TimeDelta>,
    /// Status path walked after creation, each step one hour after the last.
    path: &'static [TaskStatus],
}

impl Seed {
    fn into_task(self, now: DateTime<Utc>) -> Task {
        let created_at = now - self.created;
        let mut status = TaskStatus::Pending;
        let mut updated_at = created_at;
        let mut completed_at = None;
        let mut history = Vec::with_capacity(self.path.len());
        for (step, next) in (1_u16..).zip(self.path.iter().copied()) {
            updated_at += TimeDelta::hours(1);
            if next == TaskStatus::Completed {
                completed_at = Some(updated_at);
            }
            history.push(TaskHistory::status_changed(
                seed_history_id(self.index, step),
                status,
                next,
                SEED_ACTOR,
                updated_at,
            ));
            status = next;
        }

        Task::from_persisted(PersistedTaskData {
            id: seed_task_id(self.index),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            status,
            priority: self.priority,
            task_type: self.task_type,
            assigned_to: self.assigned_to.to_owned(),
            computer_id: self.computer_id.map(str::to_owned),
            location: self.location.to_owned(),
            created_at,
            updated_at,
            due_date: self.due_in.map(|offset| now + offset),
            completed_at,
            history,
        })
    }
}

/// Builds the seed collection anchored at `now`.
#[must_use]
pub fn seed_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let seeds = [
        Seed {
            index: 1,
            title: "Reinstalação do Windows - Laboratório 3",
            description: "Reinstalar o Windows 11 e os softwares padrão nas máquinas do laboratório.",
            priority: TaskPriority::High,
            task_type: TaskType::Software,
            assigned_to: "Carlos Silva",
            computer_id: Some("LAB3-PC12"),
            location: "Laboratório 3 - PC 12",
            created: TimeDelta::days(2),
            due_in: Some(TimeDelta::days(3)),
            path: &[],
        },
        Seed {
            index: 2,
            title: "Troca de switch do bloco B",
            description: "Switch principal do bloco B com perda de pacotes intermitente.",
            priority: TaskPriority::Urgent,
            task_type: TaskType::Network,
            assigned_to: "Ana Souza",
            computer_id: None,
            location: "Bloco B - Rack 2",
            created: TimeDelta::days(1),
            due_in: Some(TimeDelta::days(1)),
            path: &[TaskStatus::InProgress],
        },
        Seed {
            index: 3,
            title: "Atualização de antivírus",
            description: "Distribuir a nova versão do antivírus corporativo para as estações administrativas.",
            priority: TaskPriority::Medium,
            task_type: TaskType::Security,
            assigned_to: "Bruno Lima",
            computer_id: None,
            location: "Administração",
            created: TimeDelta::days(10),
            due_in: Some(TimeDelta::days(-5)),
            path: &[TaskStatus::InProgress, TaskStatus::Completed],
        },
        Seed {
            index: 4,
            title: "Impressora sem conexão na secretaria",
            description: "Impressora da secretaria não aparece na rede após queda de energia.",
            priority: TaskPriority::Urgent,
            task_type: TaskType::Hardware,
            assigned_to: "Carlos Silva",
            computer_id: Some("SEC-IMP01"),
            location: "Secretaria",
            created: TimeDelta::hours(3),
            due_in: None,
            path: &[],
        },
        Seed {
            index: 5,
            title: "Limpeza preventiva dos servidores",
            description: "Limpeza física e verificação de ventoinhas dos servidores do rack principal.",
            priority: TaskPriority::Low,
            task_type: TaskType::Maintenance,
            assigned_to: "Diego Rocha",
            computer_id: Some("SRV-01"),
            location: "Sala de Servidores",
            created: TimeDelta::days(7),
            due_in: Some(TimeDelta::days(14)),
            path: &[],
        },
        Seed {
            index: 6,
            title: "Configuração de VPN para docentes",
            description: "Criar perfis de VPN para acesso remoto ao sistema acadêmico.",
            priority: TaskPriority::High,
            task_type: TaskType::Network,
            assigned_to: "Ana Souza",
            computer_id: None,
            location: "Sala dos Professores",
            created: TimeDelta::days(4),
            due_in: Some(TimeDelta::days(2)),
            path: &[TaskStatus::InProgress],
        },
        Seed {
            index: 7,
            title: "Substituição de monitor com defeito",
            description: "Monitor com listras verticais; substituição aguardando verba.",
            priority: TaskPriority::Low,
            task_type: TaskType::Hardware,
            assigned_to: "Bruno Lima",
            computer_id: Some("LAB1-PC03"),
            location: "Laboratório 1 - PC 03",
            created: TimeDelta::days(15),
            due_in: None,
            path: &[TaskStatus::Cancelled],
        },
        Seed {
            index: 8,
            title: "Auditoria de contas inativas",
            description: "Desativar contas de ex-funcionários no domínio e no e-mail.",
            priority: TaskPriority::Urgent,
            task_type: TaskType::Security,
            assigned_to: "Diego Rocha",
            computer_id: None,
            location: "Diretoria de TI",
            created: TimeDelta::days(5),
            due_in: Some(TimeDelta::days(2)),
            path: &[],
        },
    ];

    seeds.into_iter().map(|seed| seed.into_task(now)).collect()
}
