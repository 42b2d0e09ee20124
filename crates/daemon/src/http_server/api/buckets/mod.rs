pub mod add;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

// Re-export for convenience
pub use add::AddRequest;
pub use create::CreateRequest;
pub use delete::DeleteRequest;
pub use get::{GetRequest, RangeQuery};
pub use list::ListRequest;
