//! Enum translation between catalog and map application code tables
//!
//! The catalog and the map application classify caches, containers and
//! waypoints with two independent schemes. These three functions are the
//! complete mapping between them: pure, total, and incapable of failing.
//! `None` is the first-class "unmapped" outcome; the builders consume it as
//! "leave the external field unset".
//!
//! The waypoint table is deliberately many-to-one: the map application has a
//! single "stages" code standing in for own waypoints, multi stages and
//! generic waypoints alike.

use crate::core::points::{CacheSizeCode, CacheTypeCode, WaypointKindCode};
use crate::domain::{CacheSize, CacheType, WaypointKind};

/// Maps a catalog cache type to the map application's code table.
///
/// Returns `None` for catalog types the map application has no code for.
pub fn cache_type_code(cache_type: CacheType) -> Option<CacheTypeCode> {
    match cache_type {
        CacheType::Traditional => Some(CacheTypeCode::Traditional),
        CacheType::Multi => Some(CacheTypeCode::Multi),
        CacheType::Mystery => Some(CacheTypeCode::Mystery),
        CacheType::Letterbox => Some(CacheTypeCode::Letterbox),
        CacheType::Event => Some(CacheTypeCode::Event),
        CacheType::MegaEvent => Some(CacheTypeCode::MegaEvent),
        CacheType::Earth => Some(CacheTypeCode::Earth),
        CacheType::Cito => Some(CacheTypeCode::CacheInTrashOut),
        CacheType::Webcam => Some(CacheTypeCode::Webcam),
        CacheType::Virtual => Some(CacheTypeCode::Virtual),
        CacheType::Wherigo => Some(CacheTypeCode::Wherigo),
        CacheType::ProjectApe => Some(CacheTypeCode::ProjectApe),
        CacheType::GpsExhibit => Some(CacheTypeCode::GpsAdventure),
        CacheType::UserDefined | CacheType::Unknown => None,
    }
}

/// Maps a catalog container size to the map application's code table.
pub fn cache_size_code(size: CacheSize) -> Option<CacheSizeCode> {
    match size {
        CacheSize::Micro => Some(CacheSizeCode::Micro),
        CacheSize::Small => Some(CacheSizeCode::Small),
        CacheSize::Regular => Some(CacheSizeCode::Regular),
        CacheSize::Large => Some(CacheSizeCode::Large),
        CacheSize::NotChosen => Some(CacheSizeCode::NotChosen),
        CacheSize::Other => Some(CacheSizeCode::Other),
        CacheSize::VeryLarge | CacheSize::Virtual | CacheSize::Unknown => None,
    }
}

/// Maps a catalog waypoint kind to the map application's code table.
///
/// Own waypoints, stages and generic waypoints all collapse onto the
/// "stages" code; the map application does not distinguish them.
pub fn waypoint_kind_code(kind: WaypointKind) -> Option<WaypointKindCode> {
    match kind {
        WaypointKind::Final => Some(WaypointKindCode::Final),
        WaypointKind::Own => Some(WaypointKindCode::Stages),
        WaypointKind::Parking => Some(WaypointKindCode::Parking),
        WaypointKind::Puzzle => Some(WaypointKindCode::Question),
        WaypointKind::Stage => Some(WaypointKindCode::Stages),
        WaypointKind::Trailhead => Some(WaypointKindCode::Trailhead),
        WaypointKind::Waypoint => Some(WaypointKindCode::Stages),
        WaypointKind::Original => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CacheType::Traditional, Some(CacheTypeCode::Traditional))]
    #[test_case(CacheType::Multi, Some(CacheTypeCode::Multi))]
    #[test_case(CacheType::Mystery, Some(CacheTypeCode::Mystery))]
    #[test_case(CacheType::Letterbox, Some(CacheTypeCode::Letterbox))]
    #[test_case(CacheType::Event, Some(CacheTypeCode::Event))]
    #[test_case(CacheType::MegaEvent, Some(CacheTypeCode::MegaEvent))]
    #[test_case(CacheType::Earth, Some(CacheTypeCode::Earth))]
    #[test_case(CacheType::Cito, Some(CacheTypeCode::CacheInTrashOut))]
    #[test_case(CacheType::Webcam, Some(CacheTypeCode::Webcam))]
    #[test_case(CacheType::Virtual, Some(CacheTypeCode::Virtual))]
    #[test_case(CacheType::Wherigo, Some(CacheTypeCode::Wherigo))]
    #[test_case(CacheType::ProjectApe, Some(CacheTypeCode::ProjectApe))]
    #[test_case(CacheType::GpsExhibit, Some(CacheTypeCode::GpsAdventure))]
    #[test_case(CacheType::UserDefined, None)]
    #[test_case(CacheType::Unknown, None)]
    fn cache_type_table(input: CacheType, expected: Option<CacheTypeCode>) {
        assert_eq!(cache_type_code(input), expected);
    }

    #[test_case(CacheSize::Micro, Some(CacheSizeCode::Micro))]
    #[test_case(CacheSize::Small, Some(CacheSizeCode::Small))]
    #[test_case(CacheSize::Regular, Some(CacheSizeCode::Regular))]
    #[test_case(CacheSize::Large, Some(CacheSizeCode::Large))]
    #[test_case(CacheSize::NotChosen, Some(CacheSizeCode::NotChosen))]
    #[test_case(CacheSize::Other, Some(CacheSizeCode::Other))]
    #[test_case(CacheSize::VeryLarge, None)]
    #[test_case(CacheSize::Virtual, None)]
    #[test_case(CacheSize::Unknown, None)]
    fn cache_size_table(input: CacheSize, expected: Option<CacheSizeCode>) {
        assert_eq!(cache_size_code(input), expected);
    }

    #[test_case(WaypointKind::Final, Some(WaypointKindCode::Final))]
    #[test_case(WaypointKind::Own, Some(WaypointKindCode::Stages))]
    #[test_case(WaypointKind::Parking, Some(WaypointKindCode::Parking))]
    #[test_case(WaypointKind::Puzzle, Some(WaypointKindCode::Question))]
    #[test_case(WaypointKind::Stage, Some(WaypointKindCode::Stages))]
    #[test_case(WaypointKind::Trailhead, Some(WaypointKindCode::Trailhead))]
    #[test_case(WaypointKind::Waypoint, Some(WaypointKindCode::Stages))]
    #[test_case(WaypointKind::Original, None)]
    fn waypoint_kind_table(input: WaypointKind, expected: Option<WaypointKindCode>) {
        assert_eq!(waypoint_kind_code(input), expected);
    }

    #[test]
    fn test_staged_kinds_collapse_onto_one_code() {
        let collapsed: Vec<_> = [WaypointKind::Own, WaypointKind::Stage, WaypointKind::Waypoint]
            .into_iter()
            .map(waypoint_kind_code)
            .collect();
        assert!(collapsed
            .iter()
            .all(|c| *c == Some(WaypointKindCode::Stages)));
    }

    #[test]
    fn test_translation_is_stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(
                cache_type_code(CacheType::Wherigo),
                Some(CacheTypeCode::Wherigo)
            );
        }
    }
}
