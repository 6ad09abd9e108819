pub(crate) mod error;
pub(crate) mod html_table;
pub(crate) mod http_source;

pub use error::{FetchError, Result as FetchErrorResult};
pub use html_table::first_table;
pub use http_source::HttpLimitSource;
