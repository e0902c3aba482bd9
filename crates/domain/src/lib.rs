//! `gauchorecords-domain` — the record types served by the API.
//!
//! Each entity is a flat record with a store-assigned `id` and camelCase
//! wire names. Constructors leave `id` unassigned; the persistence gateway
//! fills it in on first save.

pub mod article;
pub mod help_request;
pub mod menu_item;
pub mod recommendation_request;
pub mod ucsb_date;

pub use article::Article;
pub use help_request::HelpRequest;
pub use menu_item::UcsbDiningCommonsMenuItem;
pub use recommendation_request::RecommendationRequest;
pub use ucsb_date::UcsbDate;
