mod category;
mod decision;
mod deny;
mod query;
mod session;

pub use category::{CategoryClass, CategoryTable};
pub use decision::Decision;
pub use deny::{
    DenyRegexRequest, DenyRegexResponse, ProcessedDomains, ProcessedError, ProcessedItem,
};
pub use query::{QueryEntry, QueryLogPage, QueryStatus};
pub use session::{AuthResponse, AuthSession, Session};
