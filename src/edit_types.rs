// src/edit_types.rs

use crate::error::{Error, Result};
use crate::model::EditType;

/// MusicBrainz edit type codes and their constant names, sorted by code.
static EDIT_TYPES: &[(EditType, &str)] = &[
    (1, "ARTIST_CREATE"),
    (2, "ARTIST_EDIT"),
    (3, "ARTIST_DELETE"),
    (4, "ARTIST_MERGE"),
    (5, "ARTIST_ADD_ANNOTATION"),
    (6, "ARTIST_ADD_ALIAS"),
    (7, "ARTIST_DELETE_ALIAS"),
    (8, "ARTIST_EDIT_ALIAS"),
    (9, "ARTIST_EDITCREDIT"),
    (10, "LABEL_CREATE"),
    (11, "LABEL_EDIT"),
    (13, "LABEL_DELETE"),
    (14, "LABEL_MERGE"),
    (15, "LABEL_ADD_ANNOTATION"),
    (16, "LABEL_ADD_ALIAS"),
    (17, "LABEL_DELETE_ALIAS"),
    (18, "LABEL_EDIT_ALIAS"),
    (20, "RELEASEGROUP_CREATE"),
    (21, "RELEASEGROUP_EDIT"),
    (22, "RELEASEGROUP_SET_COVER_ART"),
    (23, "RELEASEGROUP_DELETE"),
    (24, "RELEASEGROUP_MERGE"),
    (25, "RELEASEGROUP_ADD_ANNOTATION"),
    (31, "RELEASE_CREATE"),
    (32, "RELEASE_EDIT"),
    (33, "RELEASE_MOVE"),
    (34, "RELEASE_ADDRELEASELABEL"),
    (35, "RELEASE_ADD_ANNOTATION"),
    (36, "RELEASE_DELETERELEASELABEL"),
    (37, "RELEASE_EDITRELEASELABEL"),
    (38, "RELEASE_CHANGE_QUALITY"),
    (39, "RELEASE_EDIT_BARCODES"),
    (41, "WORK_CREATE"),
    (42, "WORK_EDIT"),
    (43, "WORK_DELETE"),
    (44, "WORK_MERGE"),
    (45, "WORK_ADD_ANNOTATION"),
    (46, "WORK_ADD_ALIAS"),
    (47, "WORK_DELETE_ALIAS"),
    (48, "WORK_EDIT_ALIAS"),
    (49, "WORK_ADD_ISWCS"),
    (51, "MEDIUM_CREATE"),
    (52, "MEDIUM_EDIT"),
    (53, "MEDIUM_DELETE"),
    (54, "MEDIUM_REMOVE_DISCID"),
    (55, "MEDIUM_ADD_DISCID"),
    (56, "MEDIUM_MOVE_DISCID"),
    (58, "SET_TRACK_LENGTHS"),
    (61, "PLACE_CREATE"),
    (62, "PLACE_EDIT"),
    (63, "PLACE_DELETE"),
    (64, "PLACE_MERGE"),
    (65, "PLACE_ADD_ANNOTATION"),
    (66, "PLACE_ADD_ALIAS"),
    (67, "PLACE_DELETE_ALIAS"),
    (68, "PLACE_EDIT_ALIAS"),
    (71, "RECORDING_CREATE"),
    (72, "RECORDING_EDIT"),
    (73, "RECORDING_DELETE"),
    (74, "RECORDING_MERGE"),
    (75, "RECORDING_ADD_ANNOTATION"),
    (76, "RECORDING_ADD_ISRCS"),
    (78, "RECORDING_REMOVE_ISRC"),
    (81, "AREA_CREATE"),
    (82, "AREA_EDIT"),
    (83, "AREA_DELETE"),
    (84, "AREA_MERGE"),
    (85, "AREA_ADD_ANNOTATION"),
    (86, "AREA_ADD_ALIAS"),
    (87, "AREA_DELETE_ALIAS"),
    (88, "AREA_EDIT_ALIAS"),
    (90, "RELATIONSHIP_CREATE"),
    (91, "RELATIONSHIP_EDIT"),
    (92, "RELATIONSHIP_DELETE"),
    (93, "RELATIONSHIP_ADD_TYPE"),
    (94, "RELATIONSHIP_EDIT_TYPE"),
    (95, "RELATIONSHIP_REMOVE_LINK_TYPE"),
    (96, "RELATIONSHIP_REMOVE_LINK_ATTRIBUTE"),
    (97, "RELATIONSHIP_EDIT_LINK_ATTRIBUTE"),
    (98, "RELATIONSHIP_ADD_ATTRIBUTE"),
    (99, "RELATIONSHIPS_REORDER"),
    (101, "EDIT_URL"),
    (120, "EDIT_WIKIDOC"),
    (131, "INSTRUMENT_CREATE"),
    (132, "INSTRUMENT_EDIT"),
    (133, "INSTRUMENT_DELETE"),
    (134, "INSTRUMENT_MERGE"),
    (135, "INSTRUMENT_ADD_ANNOTATION"),
    (136, "INSTRUMENT_ADD_ALIAS"),
    (137, "INSTRUMENT_DELETE_ALIAS"),
    (138, "INSTRUMENT_EDIT_ALIAS"),
    (140, "SERIES_CREATE"),
    (141, "SERIES_EDIT"),
    (142, "SERIES_DELETE"),
    (143, "SERIES_MERGE"),
    (144, "SERIES_ADD_ANNOTATION"),
    (145, "SERIES_ADD_ALIAS"),
    (146, "SERIES_DELETE_ALIAS"),
    (147, "SERIES_EDIT_ALIAS"),
    (150, "EVENT_CREATE"),
    (151, "EVENT_EDIT"),
    (152, "EVENT_DELETE"),
    (153, "EVENT_MERGE"),
    (154, "EVENT_ADD_ANNOTATION"),
    (155, "EVENT_ADD_ALIAS"),
    (156, "EVENT_DELETE_ALIAS"),
    (157, "EVENT_EDIT_ALIAS"),
    (158, "EVENT_ADD_EVENT_ART"),
    (159, "EVENT_REMOVE_EVENT_ART"),
    (160, "EVENT_EDIT_EVENT_ART"),
    (161, "EVENT_REORDER_EVENT_ART"),
    (201, "ADD_ANNOTATION"),
    (202, "ADD_RELEASE_ANNOTATION"),
    (203, "ADD_TRACK_OLD"),
    (204, "ADD_TRACK_KV"),
    (205, "ADD_DISCID"),
    (206, "ADD_LINK"),
    (207, "EDIT_LINK"),
    (208, "REMOVE_LINK"),
    (209, "ADD_LINK_TYPE"),
    (210, "EDIT_LINK_TYPE"),
    (211, "REMOVE_LINK_TYPE"),
    (212, "ADD_LINK_ATTR"),
    (213, "EDIT_LINK_ATTR"),
    (214, "REMOVE_LINK_ATTR"),
    (215, "EDIT_RELEASE_NAME"),
    (216, "EDIT_RELEASE_EVENTS_OLD"),
    (217, "ADD_RELEASE"),
    (218, "EDIT_TRACKNAME"),
    (219, "EDIT_TRACKNUM"),
    (220, "EDIT_TRACK_LENGTH"),
    (221, "EDIT_RELEASE_ATTRS"),
    (222, "EDIT_RELEASE_LANGUAGE"),
    (223, "EDIT_RELEASE_ARTIST"),
    (224, "MOVE_DISCID"),
    (225, "REMOVE_DISCID"),
    (226, "MOVE_RELEASE"),
    (227, "MERGE_RELEASE"),
    (228, "MERGE_RELEASE_MAC"),
    (229, "REMOVE_RELEASES"),
    (230, "REMOVE_TRACK"),
    (231, "REMOVE_RELEASE"),
    (232, "ADD_TRACK"),
    (233, "EDIT_RELEASE_EVENTS"),
    (234, "ADD_RELEASE_EVENTS"),
    (235, "REMOVE_RELEASE_EVENTS"),
    (236, "CHANGE_TRACK_ARTIST"),
    (237, "CHANGE_ARTIST_QUALITY"),
    (238, "CHANGE_RELEASE_QUALITY"),
    (239, "EDIT_ARTIST"),
    (240, "ADD_ARTIST"),
    (241, "REMOVE_ARTIST"),
    (242, "MERGE_ARTIST"),
    (243, "ADD_ARTIST_ALIAS"),
    (244, "EDIT_ARTIST_ALIAS"),
    (245, "REMOVE_ARTIST_ALIAS"),
    (246, "ADD_LABEL"),
    (247, "EDIT_LABEL"),
    (248, "REMOVE_LABEL"),
    (249, "MERGE_LABEL"),
    (250, "ADD_LABEL_ALIAS"),
    (251, "EDIT_LABEL_ALIAS"),
    (252, "REMOVE_LABEL_ALIAS"),
    (253, "ADD_PUIDS"),
    (254, "REMOVE_PUID"),
    (255, "ADD_ISRCS"),
    (256, "REMOVE_ISRC"),
    (257, "EDIT_RELEASE_ATTRS_OLD"),
    (258, "ADD_STANDALONE_RECORDING"),
    (259, "ADD_TRACK_DISCID"),
    (260, "SET_TRACK_LENGTHS_FROM_CDTOC"),
    (310, "RELEASE_DELETE"),
    (311, "RELEASE_MERGE"),
    (312, "RELEASE_ARTIST"),
    (313, "RELEASE_REORDER_MEDIUMS"),
    (314, "RELEASE_ADD_COVER_ART"),
    (315, "RELEASE_REMOVE_COVER_ART"),
    (316, "RELEASE_EDIT_COVER_ART"),
    (317, "RELEASE_REORDER_COVER_ART"),
];

/// Returns the constant name for `et`, or `UNKNOWN_<code>` for codes missing
/// from the table.
pub fn edit_type_name(et: EditType) -> String {
    match EDIT_TYPES.binary_search_by_key(&et, |&(code, _)| code) {
        Ok(i) => EDIT_TYPES[i].1.to_string(),
        Err(_) => format!("UNKNOWN_{}", et),
    }
}

/// Looks up the edit type with the supplied constant name (e.g. "ARTIST_CREATE").
/// Matching ignores ASCII case; `UNKNOWN_<code>` labels are accepted too.
pub fn named_edit_type(name: &str) -> Result<EditType> {
    if let Some(&(code, _)) = EDIT_TYPES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
    {
        return Ok(code);
    }
    name.get(..8)
        .filter(|prefix| prefix.eq_ignore_ascii_case("UNKNOWN_"))
        .and_then(|_| name[8..].parse::<EditType>().ok())
        .ok_or_else(|| Error::UnknownEditType(name.to_string()))
}
