pub mod delete;
pub mod get;
pub mod update;

// Re-export for convenience
pub use delete::DeleteValueRequest;
pub use get::GetValueRequest;
pub use update::UpdateRequest;
