mod error;
pub use error::CollectError;

mod source;
pub use source::StatusSource;

mod fetch;
pub use fetch::{DEFAULT_FETCH_TIMEOUT, StatusFetcher};

mod poller;
pub use poller::Poller;
