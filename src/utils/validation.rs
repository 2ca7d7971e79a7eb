use crate::error::{AppError, AppResult};
use crate::models::ValidatedDraw;

/// Minimum number of non-blank participants in a draw
pub const MIN_PARTICIPANTS: usize = 3;

/// Matches the `VARCHAR(255)` columns of the `results` table
pub const MAX_NAME_CHARS: usize = 255;

/// Checks a draw request and returns its trimmed name and participants.
///
/// The name is checked first, so an empty name is reported even when the
/// participant list is also short. Blank participant entries are dropped;
/// duplicates are kept as separate slots.
pub fn validate_draw(draw_name: &str, participants: &[String]) -> AppResult<ValidatedDraw> {
    let draw_name = draw_name.trim();
    if draw_name.is_empty() {
        return Err(AppError::InvalidInput("Draw name is required".to_string()));
    }
    if draw_name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::InvalidInput(format!(
            "Draw name must be at most {MAX_NAME_CHARS} characters"
        )));
    }

    let participants: Vec<String> = participants
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if participants.iter().any(|p| p.chars().count() > MAX_NAME_CHARS) {
        return Err(AppError::InvalidInput(format!(
            "Participant names must be at most {MAX_NAME_CHARS} characters"
        )));
    }

    if participants.len() < MIN_PARTICIPANTS {
        return Err(AppError::InsufficientParticipants {
            found: participants.len(),
            required: MIN_PARTICIPANTS,
        });
    }

    Ok(ValidatedDraw {
        draw_name: draw_name.to_string(),
        participants,
    })
}
