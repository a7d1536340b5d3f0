//! Page Components

mod home;
mod oracle;

pub use home::HomePage;
pub use oracle::OracleSection;
