mod matches;
mod token;

pub use matches::MatchCacheManager;
pub use token::TokenManager;
