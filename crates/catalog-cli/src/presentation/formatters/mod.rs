pub mod bytes;
pub mod currency;
pub mod text;
pub mod time;

pub use bytes::format_bytes;
pub use currency::format_usd;
pub use text::{short_id, truncate};
pub use time::format_timestamp;
