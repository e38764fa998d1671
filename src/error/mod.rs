mod lookup;
mod store;

pub use lookup::LookupError;
pub use store::{ApiErrorBody, ApiErrorObject, StoreError};
