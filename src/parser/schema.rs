//! Attribute layouts for the IFC entity types the extraction reads.
//!
//! Positions are shared by IFC2X3 and IFC4 up to the last attribute listed
//! here. Types missing from the table expose no named attributes.

/// Building storey entity types.
pub const BUILDING_STOREY: &[&str] = &["IFCBUILDINGSTOREY"];

pub const UNIT_ASSIGNMENT: &[&str] = &["IFCUNITASSIGNMENT"];
pub const SI_UNIT: &[&str] = &["IFCSIUNIT"];
pub const PROJECT: &[&str] = &["IFCPROJECT"];

pub const REL_CONTAINED_IN_SPATIAL_STRUCTURE: &[&str] = &["IFCRELCONTAINEDINSPATIALSTRUCTURE"];
pub const REL_AGGREGATES: &[&str] = &["IFCRELAGGREGATES"];
pub const REL_DEFINES_BY_PROPERTIES: &[&str] = &["IFCRELDEFINESBYPROPERTIES"];

pub const ELEMENT_QUANTITY: &[&str] = &["IFCELEMENTQUANTITY"];
pub const QUANTITY_LENGTH: &[&str] = &["IFCQUANTITYLENGTH"];
pub const QUANTITY_AREA: &[&str] = &["IFCQUANTITYAREA"];
pub const QUANTITY_VOLUME: &[&str] = &["IFCQUANTITYVOLUME"];

const PRODUCT: [&str; 7] = [
    "GlobalId",
    "OwnerHistory",
    "Name",
    "Description",
    "ObjectType",
    "ObjectPlacement",
    "Representation",
];

const OPENING_ELEMENT: &[&str] = &[
    PRODUCT[0],
    PRODUCT[1],
    PRODUCT[2],
    PRODUCT[3],
    PRODUCT[4],
    PRODUCT[5],
    PRODUCT[6],
    "Tag",
    "OverallHeight",
    "OverallWidth",
];

const STRUCTURAL_MEMBER: &[&str] = &[
    PRODUCT[0],
    PRODUCT[1],
    PRODUCT[2],
    PRODUCT[3],
    PRODUCT[4],
    PRODUCT[5],
    PRODUCT[6],
    "Tag",
    "PredefinedType",
];

const SPATIAL_STRUCTURE: &[&str] = &[
    PRODUCT[0],
    PRODUCT[1],
    PRODUCT[2],
    PRODUCT[3],
    PRODUCT[4],
    PRODUCT[5],
    PRODUCT[6],
    "LongName",
    "CompositionType",
    "Elevation",
];

const SPACE: &[&str] = &[
    PRODUCT[0],
    PRODUCT[1],
    PRODUCT[2],
    PRODUCT[3],
    PRODUCT[4],
    PRODUCT[5],
    PRODUCT[6],
    "LongName",
    "CompositionType",
    "PredefinedType",
    "ElevationWithFlooring",
];

/// Attribute names of `entity_type` in declaration order.
#[must_use]
pub fn attribute_names(entity_type: &str) -> Option<&'static [&'static str]> {
    let names: &'static [&'static str] = match entity_type {
        "IFCDOOR" | "IFCDOORSTANDARDCASE" | "IFCWINDOW" | "IFCWINDOWSTANDARDCASE" => {
            OPENING_ELEMENT
        }
        "IFCBEAM" | "IFCBEAMSTANDARDCASE" | "IFCCOLUMN" | "IFCCOLUMNSTANDARDCASE" => {
            STRUCTURAL_MEMBER
        }
        "IFCBUILDINGSTOREY" | "IFCBUILDING" => SPATIAL_STRUCTURE,
        "IFCSPACE" => SPACE,
        "IFCPROJECT" => &[
            "GlobalId",
            "OwnerHistory",
            "Name",
            "Description",
            "ObjectType",
            "LongName",
            "Phase",
            "RepresentationContexts",
            "UnitsInContext",
        ],
        "IFCRELCONTAINEDINSPATIALSTRUCTURE" => &[
            "GlobalId",
            "OwnerHistory",
            "Name",
            "Description",
            "RelatedElements",
            "RelatingStructure",
        ],
        "IFCRELAGGREGATES" => &[
            "GlobalId",
            "OwnerHistory",
            "Name",
            "Description",
            "RelatingObject",
            "RelatedObjects",
        ],
        "IFCRELDEFINESBYPROPERTIES" => &[
            "GlobalId",
            "OwnerHistory",
            "Name",
            "Description",
            "RelatedObjects",
            "RelatingPropertyDefinition",
        ],
        "IFCELEMENTQUANTITY" => &[
            "GlobalId",
            "OwnerHistory",
            "Name",
            "Description",
            "MethodOfMeasurement",
            "Quantities",
        ],
        "IFCQUANTITYLENGTH" => &["Name", "Description", "Unit", "LengthValue", "Formula"],
        "IFCQUANTITYAREA" => &["Name", "Description", "Unit", "AreaValue", "Formula"],
        "IFCQUANTITYVOLUME" => &["Name", "Description", "Unit", "VolumeValue", "Formula"],
        "IFCUNITASSIGNMENT" => &["Units"],
        "IFCSIUNIT" => &["Dimensions", "UnitType", "Prefix", "Name"],
        _ => return None,
    };
    Some(names)
}

/// Position of `attribute` on `entity_type`, if the type declares it.
#[must_use]
pub fn attribute_index(entity_type: &str, attribute: &str) -> Option<usize> {
    attribute_names(entity_type)?
        .iter()
        .position(|name| *name == attribute)
}
