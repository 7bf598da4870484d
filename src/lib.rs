pub mod activity;
pub mod annotator;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use annotator::{AuthorizationAnnotator, ProtectedAttributeAnnotator};
pub use error::AuthzError;
pub use pipeline::HookPipeline;
pub use registry::{ConfigRegistry, FileRegistry, MemoryRegistry, RegistryError};
pub use types::AuthorizationContext;
