pub mod assess_articulation_use_case;
pub mod assessment_config;
pub mod assessment_logger;
