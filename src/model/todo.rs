use crate::model::{OrderId, Priority, ProcessId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoKind {
    MaterialFollowup,
    OutsourceFollowup,
    ScheduleConfirm,
    ProductionUpdate,
    CustomerReply,
    QcIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Open,
    InProgress,
    Done,
    Cancelled,
}

/// A follow-up task pinned to one process of one order.
///
/// Todos only point at orders; nothing in the order or machine stores reads or
/// changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub order_id: OrderId,
    pub task_id: ProcessId,
    /// What has to be handled.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub kind: TodoKind,
    pub priority: Priority,
    #[serde(default)]
    pub status: TodoStatus,
    pub assignee_user_id: String,
    pub due_at: DateTime<Utc>,
}

impl Todo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        order_id: impl Into<OrderId>,
        task_id: impl Into<ProcessId>,
        content: impl Into<String>,
        kind: TodoKind,
        assignee_user_id: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            order_id: order_id.into(),
            task_id: task_id.into(),
            content: content.into(),
            created_at: Utc::now(),
            kind,
            priority: Priority::Normal,
            status: TodoStatus::Open,
            assignee_user_id: assignee_user_id.into(),
            due_at,
        }
    }

    /// Open or in progress, and past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        matches!(self.status, TodoStatus::Open | TodoStatus::InProgress) && now > self.due_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_overdue_only_while_unfinished() {
        let due = Utc::now();
        let mut todo = Todo::new(
            1,
            "Chase bar stock",
            "ORD-1",
            "P-1",
            "Supplier ETA slipped by two days",
            TodoKind::MaterialFollowup,
            "u-42",
            due,
        );
        let later = due + Duration::hours(1);

        assert!(todo.is_overdue(later));
        assert!(!todo.is_overdue(due - Duration::hours(1)));

        todo.status = TodoStatus::Done;
        assert!(!todo.is_overdue(later));
    }
}
