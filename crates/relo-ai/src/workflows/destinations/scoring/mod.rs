//! The three criterion scorers, each mapping a user profile and a country
//! record onto a 0-100 score. They are independent of one another and free
//! of side effects; the engine may evaluate them in any order.

mod job;
mod language;
mod quality;

pub use job::job_score;
pub use language::language_score;
pub use quality::quality_of_life_score;
