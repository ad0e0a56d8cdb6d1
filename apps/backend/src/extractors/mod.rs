pub mod path_ids;
pub mod validated_json;

pub use path_ids::{GamePath, PlayerPath, TurnPath};
pub use validated_json::ValidatedJson;
