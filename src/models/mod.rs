pub mod completion;
pub mod context;
