pub mod ai_adapter;
pub mod newsletter;
pub mod providers;
pub mod recommendations;

pub use ai_adapter::{parse_ai_response, AiAdapter, ParseError};
pub use newsletter::{LogSubscriptionStore, SubscriptionStore};
pub use recommendations::generate_recommendations;
