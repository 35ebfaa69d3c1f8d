pub mod debounce;
pub mod error;
pub mod reveal;
pub mod search;
pub mod session;
pub mod word;

pub use error::LoadError;
pub use reveal::{RevealLevel, RevealState};
pub use session::{Change, Session, Update};
pub use word::{WordList, WordRecord};
