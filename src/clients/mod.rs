//! External collaborators of the document processor.
//!
//! Each trait covers one AWS service call the handler needs, and each has an
//! aws-sdk backed implementation next to it. The handler only sees the traits,
//! so tests can swap in in-memory fakes.

pub mod model_invoker;
pub mod notifier;
pub mod object_store;
pub mod summary_store;

pub use model_invoker::{BedrockModelInvoker, ModelInvoker};
pub use notifier::{Notifier, SnsNotifier};
pub use object_store::{ObjectStore, S3ObjectStore};
pub use summary_store::{DynamoSummaryStore, SummaryStore};
