pub mod helpers;
pub mod scores;

pub use scores::ScoreRenderer;
