pub mod assessment_result;
pub mod feedback;
pub mod grade;
pub mod score_builder;
pub mod word_score;
