mod commit_fields;
mod commit_type;
mod language;

pub use commit_fields::CommitFields;
pub use commit_type::CommitType;
pub use language::{Descriptions, Language};
