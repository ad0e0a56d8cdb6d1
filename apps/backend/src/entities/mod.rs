pub mod answers;
pub mod games;
pub mod players;

pub use answers::Entity as Answers;
pub use answers::Model as AnswerRow;
pub use games::Entity as Games;
pub use games::Model as GameRow;
pub use players::Entity as Players;
pub use players::Model as PlayerRow;
