//! Core data model: providers, companies, logos and AWS regions.

mod company;
mod logo;
mod provider;
mod region;

pub use company::{Company, CUSTOM_SYMBOL};
pub use logo::{LogoChain, LogoTier};
pub use provider::{ProviderId, UnknownProvider};
pub use region::{Geography, Region};
