//! Loading catalogs and advising sessions from disk

pub mod csv_parser;
pub mod requirements;
pub mod session;

pub use csv_parser::{parse_catalog_csv, parse_catalog_str};
pub use requirements::{parse_offered, split_requirements};
pub use session::{load_session, parse_session_toml};
