// Models module - data structures for the relay surface and the completion API
pub mod completion;
pub mod relay;

// Re-export commonly used types
pub use completion::{
    Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Message, Role, Usage,
};
pub use relay::{ChatRequest, ChatResponse, ErrorBody, HealthResponse};
