mod constants;
pub use constants::*;

mod identifier;
pub use identifier::Identifier;

mod labels;
pub use labels::Labels;
