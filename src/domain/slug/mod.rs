pub mod config;
pub mod generator;
pub mod lookup;
pub mod mapping;
pub mod services;
pub mod value_objects;

pub use config::{SaveEvent, SlugConfig, SlugConfigBuilder};
pub use generator::generate;
pub use lookup::{LookupScope, SlugLookup};
pub use mapping::{SlugCandidate, SlugMapping};
pub use services::{MAX_RESOLVE_ATTEMPTS, UniqueSlugResolver};
pub use value_objects::{MaxLength, Separator};
