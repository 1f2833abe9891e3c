//! Declarative command layer.
//!
//! Operations are described by static [`OperationDescriptor`]s. The
//! [`CommandInvoker`] turns caller-bound arguments into one remote call:
//!
//! ```text
//! BoundArgs ──► CallContext ──► RequestValue ──► ServiceClient ──► OutputSelector
//!   (raw)       (validated)     (nested JSON)    (one round trip)   (projection)
//! ```

mod binding;
mod blocking;
mod confirm;
mod context;
mod descriptor;
mod invoker;
mod options;
mod request;
mod selector;

pub use binding::{ArgValue, BoundArgs};
pub use confirm::{AutoConfirm, ConfirmPrompt, DenyAll};
pub use context::CallContext;
pub use descriptor::{
    BindingSource, DefaultOutput, FieldDescriptor, FieldKind, FieldLocation, HttpBinding,
    OperationDescriptor, Requirement, ResponseShape,
};
pub use invoker::{CommandInvoker, Outcome, SkipReason};
pub use options::{InvocationOptions, InvocationOptionsBuilder, SelectorOverride};
pub use request::RequestValue;
pub use selector::OutputSelector;
