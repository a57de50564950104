//! Reference data for building types.
//!
//! Hardcoded lookup tables mapping `$TYPE_*`/`$SUBTYPE_*` directive
//! tokens to human-readable building labels. Used when generating
//! asset display names and folder names.

/// Label for an unrecognized type token.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A `(type, subtype)` pair with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSubtypeLabel {
    pub type_token: &'static str,
    pub subtype_token: &'static str,
    pub label: &'static str,
}

/// Compound lookups where the subtype changes the building's meaning.
pub const TYPE_SUBTYPE_LABELS: &[TypeSubtypeLabel] = &[
    TypeSubtypeLabel {
        type_token: "$TYPE_UNIVERSITY",
        subtype_token: "$SUBTYPE_MEDICAL",
        label: "Medical University",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_UNIVERSITY",
        subtype_token: "$SUBTYPE_TECHNICAL",
        label: "Technical University",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_UNIVERSITY",
        subtype_token: "$SUBTYPE_SOVIET",
        label: "Party HQ",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_LIVING",
        subtype_token: "$SUBTYPE_HOSTEL",
        label: "Hostel",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_BROADCAST",
        subtype_token: "$SUBTYPE_RADIO",
        label: "Radio station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_BROADCAST",
        subtype_token: "$SUBTYPE_TELEVISION",
        label: "Television station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_STORAGE",
        subtype_token: "$SUBTYPE_SPACE_FOR_VEHICLES",
        label: "Vehicle storage",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PRODUCTION_LINE",
        subtype_token: "$SUBTYPE_ROAD",
        label: "Vehicle production line",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PRODUCTION_LINE",
        subtype_token: "$SUBTYPE_AIRPLANE",
        label: "Aircraft production line",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PRODUCTION_LINE",
        subtype_token: "$SUBTYPE_RAIL",
        label: "Locomotive/car production line",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_ROADDEPO",
        subtype_token: "$SUBTYPE_TROLLEYBUS",
        label: "Trolleybus depot",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_ROADDEPO",
        subtype_token: "$SUBTYPE_TRAM",
        label: "Tram depot",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_RAIL_TRAFO",
        subtype_token: "$SUBTYPE_ROAD",
        label: "Trolleybus trafo",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PASSANGER_STATION",
        subtype_token: "$SUBTYPE_CABLEWAY",
        label: "Cableway passenger station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PASSANGER_STATION",
        subtype_token: "$SUBTYPE_SHIP",
        label: "Ferry terminal",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PASSANGER_STATION",
        subtype_token: "$SUBTYPE_AIRPLANE",
        label: "Airport terminal",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_PASSANGER_STATION",
        subtype_token: "$SUBTYPE_METRO",
        label: "Metro station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_CARGO_STATION",
        subtype_token: "$SUBTYPE_CABLEWAY",
        label: "Cableway cargo station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_CARGO_STATION",
        subtype_token: "$SUBTYPE_AIRPLANE",
        label: "Airplane cargo station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_CARGO_STATION",
        subtype_token: "$SUBTYPE_SHIP",
        label: "Seaport (experimental)",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_ENGINE",
        subtype_token: "$SUBTYPE_CABLEWAY",
        label: "Cableway engine",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_CONSTRUCTION_OFFICE",
        subtype_token: "$SUBTYPE_AIRPLANE",
        label: "Helicopter construction office",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_WATER_PUMP",
        subtype_token: "$SUBTYPE_WATER_SWITCH",
        label: "Water switch",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_TRANSFORMATOR",
        subtype_token: "$SUBTYPE_PRIORITY_1",
        label: "Priority switch",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_WAITING_STATION",
        subtype_token: "$SUBTYPE_METRO",
        label: "Metro end station",
    },
    TypeSubtypeLabel {
        type_token: "$TYPE_ELETRIC_EXPORT",
        subtype_token: "$SUBTYPE_OWN_CUSTOM",
        label: "Custom electric export",
    },
];

/// A single type token with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabel {
    pub token: &'static str,
    pub label: &'static str,
}

/// Fallback lookups keyed on the type token alone.
pub const TYPE_LABELS: &[TypeLabel] = &[
    TypeLabel { token: "$TYPE_AIRPLANE_GATE", label: "Aircraft gate" },
    TypeLabel { token: "$TYPE_AIRPLANE_PARKING", label: "Aircraft parking" },
    TypeLabel { token: "$TYPE_AIRPLANE_TOWER", label: "Aircraft tower" },
    TypeLabel { token: "$TYPE_ATTRACTION", label: "Attraction" },
    TypeLabel { token: "$TYPE_BROADCAST", label: "Broadcast" },
    TypeLabel { token: "$TYPE_CAR_DEALER", label: "Car dealer" },
    TypeLabel { token: "$TYPE_CARGO_STATION", label: "Cargo station" },
    TypeLabel { token: "$TYPE_CHURCH", label: "Church" },
    TypeLabel { token: "$TYPE_CITYHALL", label: "City hall" },
    TypeLabel { token: "$TYPE_CONSTRUCTION_OFFICE", label: "Construction office" },
    TypeLabel { token: "$TYPE_CONSTRUCTION_OFFICE_RAIL", label: "Rail construction office" },
    TypeLabel { token: "$TYPE_CONTAINER_FACILITY", label: "Container facility" },
    TypeLabel { token: "$TYPE_COOLING_TOWER", label: "Cooling tower" },
    TypeLabel { token: "$TYPE_COURT_HOUSE", label: "Court house" },
    TypeLabel { token: "$TYPE_CUSTOMHOUSE", label: "Custom house" },
    TypeLabel { token: "$TYPE_DEMOLITION_OFFICE", label: "Demolition office" },
    TypeLabel { token: "$TYPE_DISTRIBUTION_OFFICE", label: "Distribution office" },
    TypeLabel { token: "$TYPE_DISTRIBUTION_OFFICE_RAIL", label: "Rail distribution office" },
    TypeLabel { token: "$TYPE_ELETRIC_EXPORT", label: "Electric export" },
    TypeLabel { token: "$TYPE_ELETRIC_IMPORT", label: "Electric import" },
    TypeLabel { token: "$TYPE_ENGINE", label: "Engine" },
    TypeLabel { token: "$TYPE_FACTORY", label: "Factory" },
    TypeLabel { token: "$TYPE_FARM", label: "Farm" },
    TypeLabel { token: "$TYPE_FIELD", label: "Field" },
    TypeLabel { token: "$TYPE_FIRESTATION", label: "Fire station" },
    TypeLabel { token: "$TYPE_FOREIGN_PIPELINE_EXPORT", label: "Foreign pipeline export" },
    TypeLabel { token: "$TYPE_FORKLIFT_GARAGE", label: "Forklift garage" },
    TypeLabel { token: "$TYPE_GARBAGE_OFFICE", label: "Garbage office" },
    TypeLabel { token: "$TYPE_GAS_STATION", label: "Gas station" },
    TypeLabel { token: "$TYPE_HEATING_ENDSTATION", label: "Heating end station" },
    TypeLabel { token: "$TYPE_HEATING_PLANT", label: "Heating plant" },
    TypeLabel { token: "$TYPE_HEATING_SWITCH", label: "Heating switch" },
    TypeLabel { token: "$TYPE_HOSPITAL", label: "Hospital" },
    TypeLabel { token: "$TYPE_HOTEL", label: "Hotel" },
    TypeLabel { token: "$TYPE_KINDERGARTEN", label: "Kindergarten" },
    TypeLabel { token: "$TYPE_KINO", label: "Cinema" },
    TypeLabel { token: "$TYPE_LIVING", label: "Residential" },
    TypeLabel { token: "$TYPE_MINE_BAUXITE", label: "Bauxite mine" },
    TypeLabel { token: "$TYPE_MINE_COAL", label: "Coal mine" },
    TypeLabel { token: "$TYPE_MINE_GRAVEL", label: "Gravel mine" },
    TypeLabel { token: "$TYPE_MINE_IRON", label: "Iron mine" },
    TypeLabel { token: "$TYPE_MINE_OIL", label: "Oil rig/pumpjack" },
    TypeLabel { token: "$TYPE_MINE_URANIUM", label: "Uranium mine" },
    TypeLabel { token: "$TYPE_MINE_WATER", label: "Water pump" },
    TypeLabel { token: "$TYPE_MINE_WATER_SURFACE", label: "Surface water pump" },
    TypeLabel { token: "$TYPE_MINE_WOOD", label: "Woodcutter" },
    TypeLabel { token: "$TYPE_MONUMENT", label: "Monument" },
    TypeLabel { token: "$TYPE_ORPHANAGE", label: "Orphanage" },
    TypeLabel { token: "$TYPE_PARKING", label: "Parking" },
    TypeLabel { token: "$TYPE_PASSANGER_STATION", label: "Passenger station" },
    TypeLabel { token: "$TYPE_PEDESTRIAN_BRIDGE", label: "Pedestrian bridge" },
    TypeLabel { token: "$TYPE_POLICE_STATION", label: "Police station" },
    TypeLabel { token: "$TYPE_POLLUTION_METER", label: "Pollution meter" },
    TypeLabel { token: "$TYPE_POWERPLANT", label: "Power plant" },
    TypeLabel { token: "$TYPE_PRISON", label: "Prison" },
    TypeLabel { token: "$TYPE_PRODUCTION_LINE", label: "Production line" },
    TypeLabel { token: "$TYPE_PUB", label: "Pub" },
    TypeLabel { token: "$TYPE_RAIL_TRAFO", label: "Rail transformer" },
    TypeLabel { token: "$TYPE_RAILDEPO", label: "Rail depot" },
    TypeLabel { token: "$TYPE_REPAIR_OFFICE", label: "Repair office" },
    TypeLabel { token: "$TYPE_ROADDEPO", label: "Road depot" },
    TypeLabel { token: "$TYPE_SCHOOL", label: "School" },
    TypeLabel { token: "$TYPE_SCRAPYARD", label: "Scrapyard" },
    TypeLabel { token: "$TYPE_SECRET_POLICE", label: "Secret police" },
    TypeLabel { token: "$TYPE_SEWAGE_DISCHARGE", label: "Sewage discharge" },
    TypeLabel { token: "$TYPE_SEWAGE_ENDSTATION", label: "Sewage reservoir" },
    TypeLabel { token: "$TYPE_SEWAGE_PUMP", label: "Sewage pump" },
    TypeLabel { token: "$TYPE_SEWAGE_TREATMENT", label: "Sewage treatment" },
    TypeLabel { token: "$TYPE_SHIP_DOCK", label: "Ship dock" },
    TypeLabel { token: "$TYPE_SHOP", label: "Shop" },
    TypeLabel { token: "$TYPE_SPORT", label: "Sport" },
    TypeLabel { token: "$TYPE_STORAGE", label: "Storage" },
    TypeLabel { token: "$TYPE_SUBSTATION", label: "Substation" },
    TypeLabel { token: "$TYPE_TRAM_GATE", label: "Tram gate" },
    TypeLabel { token: "$TYPE_TRANSFORMATOR", label: "Transformer" },
    TypeLabel { token: "$TYPE_TRASH_CONTAINER", label: "Trash container" },
    TypeLabel { token: "$TYPE_UNIVERSITY", label: "University" },
    TypeLabel { token: "$TYPE_WAITING_STATION", label: "Waiting station" },
    TypeLabel { token: "$TYPE_WATER_ENDSTATION", label: "Water reservoir" },
    TypeLabel { token: "$TYPE_WATER_PUMP", label: "Water pump" },
    TypeLabel { token: "$TYPE_WATER_SWITCH", label: "Water switch" },
    TypeLabel { token: "$TYPE_WATER_TREATMENT", label: "Water treatment" },
];

/// Extract the first `$TYPE*` and `$SUBTYPE*` tokens from a file's lines.
pub fn find_type_tokens(lines: &[String]) -> (Option<String>, Option<String>) {
    let token_starting_with = |prefix: &str| {
        lines
            .iter()
            .map(|l| crate::directive::first_token(l))
            .find(|t| t.starts_with(prefix))
            .map(str::to_string)
    };

    (
        token_starting_with("$TYPE"),
        token_starting_with("$SUBTYPE"),
    )
}

/// Resolve a `(type, subtype)` pair to a display label.
///
/// The compound table wins over the single-type table; anything else
/// resolves to [`UNKNOWN_LABEL`]. Pure lookup, never an error.
pub fn resolve_label(type_token: Option<&str>, subtype_token: Option<&str>) -> &'static str {
    if let (Some(t), Some(s)) = (type_token, subtype_token) {
        if let Some(entry) = TYPE_SUBTYPE_LABELS
            .iter()
            .find(|e| e.type_token == t && e.subtype_token == s)
        {
            return entry.label;
        }
    }

    type_token
        .and_then(|t| TYPE_LABELS.iter().find(|e| e.token == t))
        .map_or(UNKNOWN_LABEL, |e| e.label)
}
