pub mod cache;
pub mod client;
pub mod drivers;
pub mod endpoints;
pub mod error;
pub mod mapping;
pub mod rank;
pub mod settings;
pub mod transport;

pub use cache::{DetailCache, MemoryCache, NoCache};
pub use client::BggClient;
pub use drivers::{COMMENTS_PAGE_SIZE, gather, paginate};
pub use endpoints::{CollectionSubset, Endpoints};
pub use error::BggError;
pub use rank::{OVERALL_RANK_ID, overall_rank};
pub use settings::{ClientSettings, settings_path};
pub use transport::{HttpTransport, Transport};
