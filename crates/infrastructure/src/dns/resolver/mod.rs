pub mod context;
pub mod iterative;
pub mod referral;

pub use context::{QueryBudget, Referral, ResolutionContext};
pub use iterative::IterativeResolver;
pub use referral::{select_referral, ReferralDecision};
