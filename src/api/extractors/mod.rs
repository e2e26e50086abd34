pub mod auth_ctx;
pub mod params;
pub mod validated;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use params::{Id, Params};
pub use validated::Validated;
