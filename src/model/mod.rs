pub mod record;
pub mod scores;
