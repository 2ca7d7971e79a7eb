use crate::error::{AppError, AppResult};
use crate::models::AssignmentRecord;
use crate::utils::{mint_draw_id, mint_result_id};
use chrono::Utc;

/// Pairs `participants[i]` with `receivers[i]` under one fresh draw id, minting
/// a separate retrieval id per record.
pub fn build_records(
    draw_name: &str,
    participants: &[String],
    receivers: &[String],
) -> AppResult<Vec<AssignmentRecord>> {
    if participants.len() != receivers.len() {
        return Err(AppError::InternalError(format!(
            "{} givers but {} receivers",
            participants.len(),
            receivers.len()
        )));
    }

    let draw_id = mint_draw_id()?;
    let created_at = Utc::now();

    participants
        .iter()
        .zip(receivers)
        .enumerate()
        .map(|(i, (giver, receiver))| {
            Ok(AssignmentRecord {
                draw_id: draw_id.clone(),
                draw_name: draw_name.to_string(),
                giver: giver.clone(),
                receiver: receiver.clone(),
                result_id: mint_result_id(i)?,
                created_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_records_pairs_by_index() {
        let givers = names(&["Alice", "Bob", "Carol"]);
        let receivers = names(&["Bob", "Carol", "Alice"]);
        let records = build_records("Office 2025", &givers, &receivers).unwrap();

        assert_eq!(records.len(), 3);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.giver, givers[i]);
            assert_eq!(r.receiver, receivers[i]);
            assert_eq!(r.draw_name, "Office 2025");
            assert_eq!(r.draw_id, records[0].draw_id);
        }

        let ids: HashSet<&str> = records.iter().map(|r| r.result_id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_each_call_gets_new_draw_id() {
        let givers = names(&["A", "B", "C"]);
        let receivers = names(&["B", "C", "A"]);
        let first = build_records("x", &givers, &receivers).unwrap();
        let second = build_records("x", &givers, &receivers).unwrap();
        assert_ne!(first[0].draw_id, second[0].draw_id);
    }

    #[test]
    fn test_length_mismatch() {
        let err = build_records("x", &names(&["A", "B", "C"]), &names(&["B", "A"])).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
