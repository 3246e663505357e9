//! Static datasets loaded once at startup.

mod companies;
mod regions;

pub use companies::builtin_companies;
pub use regions::builtin_regions;
