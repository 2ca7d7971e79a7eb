pub mod assignment_results;

pub use assignment_results as assignment_result_entity;
