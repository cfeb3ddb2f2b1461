//! Negotiations module - domain models, identity, merging, and traits.

mod identity;
mod merge;
mod negotiations_errors;
mod negotiations_model;
mod negotiations_traits;


pub use identity::compute_negotiation_id;
pub use merge::merge_duplicates;
pub use negotiations_errors::{FetchError, PersistenceError};
pub use negotiations_model::{
    AccountNegotiations, AccountRawHistory, Negotiation, RawNegotiation, TradeSide,
};
pub use negotiations_traits::{NegotiationRepositoryTrait, NegotiationSourceTrait};
