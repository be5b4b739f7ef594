pub mod errors;
pub mod db;
pub mod company;
pub mod company_collection;
pub mod company_collection_association;

/// Name of the seeded collection that backs the "liked" flag.
pub const LIKED_COLLECTION_NAME: &str = "Liked Companies List";

/// Name of the seeded general-purpose collection.
pub const MY_LIST_COLLECTION_NAME: &str = "My List";
