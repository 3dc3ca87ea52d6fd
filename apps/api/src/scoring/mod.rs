// Expertise scoring engine.
// calculator: pure resume/evaluation analysis and the weighted merge primitive.
// aggregator: decides what is persisted for an employee on each input event.

pub mod aggregator;
pub mod calculator;
pub mod dimensions;
pub mod keywords;
pub mod recommendations;
