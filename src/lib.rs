//! Blocking client for the Datamuse word-finding API
//!
//! ```no_run
//! use datamuse::{ApiClient, Query};
//!
//! let client = ApiClient::new();
//! let query = Query::new().means_like("duck").spelled_like("b*").max(10);
//! for word in client.words(&query)? {
//!     println!("{}", word.word);
//! }
//! # Ok::<(), datamuse::DatamuseError>(())
//! ```

pub mod api_client;
pub mod config;
pub mod error;
pub mod model;
pub mod params;
pub mod query;
pub mod transport;
pub mod url_builder;
pub mod utils;
pub mod validate;

pub use api_client::{request, ApiClient};
pub use error::{DatamuseError, Result};
pub use model::WordResult;
pub use params::{Endpoint, MetadataFlag, Param, Relation};
pub use query::Query;
pub use transport::{HttpTransport, Transport};
pub use url_builder::build_url;
pub use validate::validate;
