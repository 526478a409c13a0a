// Skill matching: catalog loading, whole-word skill detection and weighted
// JD/resume scoring.

pub mod catalog;
pub mod handlers;
pub mod skill_matcher;
