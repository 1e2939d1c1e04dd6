//! Query builders over a table named at runtime

pub(crate) mod condition;
pub(crate) mod delete;
pub(crate) mod insert;
pub(crate) mod select;
pub(crate) mod update;

pub use condition::Condition;
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;
