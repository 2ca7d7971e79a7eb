pub mod derangement;
pub mod id_generator;
pub mod validation;

pub use derangement::{MAX_ATTEMPTS, generate_derangement};
pub use id_generator::{mint_draw_id, mint_result_id};
pub use validation::{MAX_NAME_CHARS, MIN_PARTICIPANTS, validate_draw};
