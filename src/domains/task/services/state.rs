// Task domain state
// 작업 도메인 상태
use crate::shared::database::Database;
use crate::domains::task::services::TaskService;

/// Task domain state
/// 작업 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct TaskState {
    pub task_service: TaskService,
}

impl TaskState {
    pub fn new(db: Database) -> Self {
        Self {
            task_service: TaskService::new(db),
        }
    }
}
