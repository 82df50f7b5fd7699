mod verification_builder;
pub use verification_builder::VerificationBuilder;

mod provable_query_result;

mod query_verification;
pub use query_verification::verify_query;
