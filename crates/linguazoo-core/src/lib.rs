pub mod classifier;
pub mod collection;
pub mod flow;
pub mod game;
pub mod resolver;
pub mod validator;

pub use self::classifier::AnimalClassifier;
pub use self::collection::{Command, CollectionError, apply};
pub use self::flow::AddFlow;
pub use self::game::GameRound;
pub use self::resolver::{GameEntryDecision, GameEntryResolver, InvalidReason};
pub use self::validator::{AnimalValidator, ErrorKind, ValidationResult};
