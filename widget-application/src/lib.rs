pub mod command;
pub mod command_handler;
pub mod commands;
pub mod context;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod queries;
pub mod query;
pub mod query_handler;

pub use commands::{CreateWidget, Precondition, UpdateWidget};
pub use context::AppContext;
pub use dto::{WidgetDto, WidgetPayload};
pub use error::AppError;
pub use handlers::WidgetHandlers;
pub use queries::{GetWidget, ListWidgets};
