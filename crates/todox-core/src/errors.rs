use todox_core_types::RequestId;
use thiserror::Error;

use crate::model::ListId;

/// Result type alias using TodoXError
pub type Result<T> = std::result::Result<T, TodoXError>;

/// Result type alias for store operations, which surface structured errors
pub type StoreResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events, CLI output and
/// tests. Not-found is listed for completeness of the taxonomy: the store
/// itself signals absence with `None`, only callers raise it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidListName,
    DuplicateListName,
    InvalidTodoName,
    NotFound,

    // Integration
    Serialization,
    Persistence,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidListName => "ERR_INVALID_LIST_NAME",
            ExErrorKind::DuplicateListName => "ERR_DUPLICATE_LIST_NAME",
            ExErrorKind::InvalidTodoName => "ERR_INVALID_TODO_NAME",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus context
/// (operation, list id, request id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    list_id: Option<ListId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            list_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_list_id(mut self, id: ListId) -> Self {
        self.list_id = Some(id);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(list_id) = self.list_id {
            write!(f, " (list_id: {})", list_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for todox operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TodoXError {
    /// List id did not resolve to a list
    #[error("List not found: {list_id}")]
    ListNotFound { list_id: ListId },

    /// List name is empty or longer than the allowed maximum
    #[error("Invalid list name: {reason}")]
    InvalidListName { reason: String },

    /// Another list already uses this name
    #[error("List name already in use: {name}")]
    DuplicateListName { name: String },

    /// Todo name is empty or longer than the allowed maximum
    #[error("Invalid todo name: {reason}")]
    InvalidTodoName { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Conversion from TodoXError to the structured ExError
impl From<TodoXError> for ExError {
    fn from(err: TodoXError) -> Self {
        match err {
            TodoXError::ListNotFound { list_id } => ExError::new(ExErrorKind::NotFound)
                .with_list_id(list_id)
                .with_message("List not found"),

            TodoXError::InvalidListName { reason } => ExError::new(ExErrorKind::InvalidListName)
                .with_message(format!("Invalid list name: {}", reason)),

            TodoXError::DuplicateListName { name } => {
                ExError::new(ExErrorKind::DuplicateListName)
                    .with_message(format!("List name '{}' is already in use", name))
            }

            TodoXError::InvalidTodoName { reason } => ExError::new(ExErrorKind::InvalidTodoName)
                .with_message(format!("Invalid todo name: {}", reason)),

            TodoXError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            TodoXError::Config { message } => ExError::new(ExErrorKind::Config).with_message(message),
        }
    }
}

impl From<serde_json::Error> for TodoXError {
    fn from(err: serde_json::Error) -> Self {
        TodoXError::Serialization {
            message: err.to_string(),
        }
    }
}
