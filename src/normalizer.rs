//! Raw API record → canonical [`Character`]

use crate::constants::character::FALLBACK_DESCRIPTION;
use crate::error::NormalizationError;
use crate::locations::{self, POOL_SIZE};
use crate::marvel::RawCharacter;
use crate::types::{Character, CharacterId};

/// Normalize the record at `index` of a fetch batch.
/// The index doubles as the character id and selects the pool coordinates.
pub fn normalize(raw: &RawCharacter, index: usize) -> Result<Character, NormalizationError> {
    let point = locations::point_at(index).ok_or(NormalizationError::IndexOutOfPool {
        index,
        pool_size: POOL_SIZE,
    })?;

    let description = if raw.description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        raw.description.clone()
    };

    Ok(Character {
        // index < POOL_SIZE, so this never truncates
        id: index as CharacterId,
        name: raw.name.clone(),
        description,
        image_url: format!("{}.{}", raw.thumbnail.path, raw.thumbnail.extension),
        latitude: point.latitude,
        longitude: point.longitude,
        comics_count: raw.comics.available,
        series_count: raw.series.available,
        events_count: raw.events.available,
    })
}

/// Normalize a whole batch in order. Fails on the first bad record; no partial list.
pub fn normalize_all(raws: &[RawCharacter]) -> Result<Vec<Character>, NormalizationError> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LOCATION_POOL;
    use crate::marvel::{Available, Thumbnail};

    fn raw(name: &str, description: &str) -> RawCharacter {
        RawCharacter {
            name: name.to_string(),
            description: description.to_string(),
            thumbnail: Thumbnail {
                path: "http://i.annihil.us/u/prod/marvel/i/mg/6/20/52602f21f29ec".to_string(),
                extension: "jpg".to_string(),
            },
            comics: Available { available: 4 },
            series: Available { available: 2 },
            events: Available { available: 0 },
        }
    }

    #[test]
    fn test_normalize_copies_fields() {
        let character = normalize(&raw("Abyss", "Lives in the deep"), 0).unwrap();
        assert_eq!(character.id, 0);
        assert_eq!(character.name, "Abyss");
        assert_eq!(character.description, "Lives in the deep");
        assert_eq!(
            character.image_url,
            "http://i.annihil.us/u/prod/marvel/i/mg/6/20/52602f21f29ec.jpg"
        );
        assert_eq!(character.comics_count, 4);
        assert_eq!(character.series_count, 2);
        assert_eq!(character.events_count, 0);
    }

    #[test]
    fn test_empty_description_gets_fallback() {
        let character = normalize(&raw("Abomination", ""), 1).unwrap();
        assert_eq!(character.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_whitespace_description_passes_through() {
        let character = normalize(&raw("Ajaxis", " "), 1).unwrap();
        assert_eq!(character.description, " ");
    }

    #[test]
    fn test_coordinates_follow_pool_order() {
        for n in 0..=POOL_SIZE {
            let raws: Vec<_> = (0..n).map(|i| raw(&format!("c{i}"), "d")).collect();
            let characters = normalize_all(&raws).unwrap();
            assert_eq!(characters.len(), n);
            for (character, point) in characters.iter().zip(LOCATION_POOL.iter()) {
                assert_eq!((character.latitude, character.longitude), (point.latitude, point.longitude));
            }
        }
    }

    #[test]
    fn test_index_past_pool_is_rejected() {
        assert_eq!(
            normalize(&raw("Agent Zero", "d"), POOL_SIZE),
            Err(NormalizationError::IndexOutOfPool { index: 10, pool_size: 10 })
        );
    }

    #[test]
    fn test_normalize_all_rejects_eleven_records() {
        let raws: Vec<_> = (0..11).map(|i| raw(&format!("c{i}"), "")).collect();
        assert!(normalize_all(&raws).is_err());
    }
}
