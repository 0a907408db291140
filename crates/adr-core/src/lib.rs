pub mod derive;
pub mod lookup;
pub mod resolve;

pub use derive::{
    HIGH_THRESHOLD, MODERATE_THRESHOLD, NONE_SENTINEL, classify_chance, classify_status, derive,
    normalize_chance, split_adr_list,
};
pub use lookup::{Lookup, LookupService};
pub use resolve::{NotFound, resolve};
