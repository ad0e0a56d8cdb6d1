//! DTOs for answers_sea adapter.

/// DTO for inserting an answer. `content` is the text or the image reference.
#[derive(Debug, Clone)]
pub struct AnswerCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub round: i32,
    pub in_reply_to: Option<i64>,
    pub content: String,
}
