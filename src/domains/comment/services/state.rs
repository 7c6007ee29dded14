// Comment domain state
// 댓글 도메인 상태
use crate::shared::database::Database;
use crate::domains::comment::services::CommentService;

/// Comment domain state
#[derive(Clone)]
pub struct CommentState {
    pub comment_service: CommentService,
}

impl CommentState {
    pub fn new(db: Database) -> Self {
        Self {
            comment_service: CommentService::new(db),
        }
    }
}
