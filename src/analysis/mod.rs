//! Profile analysis pipeline and its result record

mod engine;
mod result;

pub use engine::analyze;
pub use result::{round_to, CurvePoint, EconomicSummary, SimulationResult, DISPLAY_AGE_LIMIT};
