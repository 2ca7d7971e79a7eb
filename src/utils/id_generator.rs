use crate::error::{AppError, AppResult};
use chrono::Utc;
use rand::RngCore;
use rand::rngs::OsRng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
/// 36^13 > 2^64, so every u64 fits
const TOKEN_LEN: usize = 13;

/// Draw identifier shared by all records of one draw: `draw_<millis>_<random>`
pub fn mint_draw_id() -> AppResult<String> {
    Ok(format!(
        "draw_{}_{}",
        Utc::now().timestamp_millis(),
        random_token()?
    ))
}

/// Retrieval identifier for one record: `result_<millis>_<index>_<random>`.
///
/// The random part carries 64 bits from the OS CSPRNG; the timestamp and
/// index only separate ids minted in the same batch.
pub fn mint_result_id(index: usize) -> AppResult<String> {
    Ok(format!(
        "result_{}_{}_{}",
        Utc::now().timestamp_millis(),
        index,
        random_token()?
    ))
}

fn random_token() -> AppResult<String> {
    let mut buf = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| AppError::StoreWriteFailure(format!("entropy source unavailable: {e}")))?;
    Ok(encode_base36(u64::from_le_bytes(buf)))
}

fn encode_base36(mut value: u64) -> String {
    let mut out = vec![b'0'; TOKEN_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE36[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_base36() {
        assert_eq!(encode_base36(0), "0000000000000");
        assert_eq!(encode_base36(35), "000000000000z");
        assert_eq!(encode_base36(36), "0000000000010");
        assert_eq!(encode_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_result_id_format() {
        let id = mint_result_id(4).unwrap();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "result");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2], "4");
        assert_eq!(parts[3].len(), TOKEN_LEN);
        assert!(parts[3].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_draw_id_format() {
        let id = mint_draw_id().unwrap();
        assert!(id.starts_with("draw_"));
        assert_eq!(id.split('_').count(), 3);
    }

    #[test]
    fn test_ten_thousand_result_ids_are_distinct() {
        let ids: HashSet<String> = (0..10_000)
            .map(|i| mint_result_id(i % 50).unwrap())
            .collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_random_part_differs_for_same_index() {
        let a = mint_result_id(0).unwrap();
        let b = mint_result_id(0).unwrap();
        assert_ne!(a.rsplit('_').next(), b.rsplit('_').next());
    }
}
