#![allow(dead_code)]

use std::path::PathBuf;

use ifc_assistant::extract::extract_ifc_data;
use ifc_assistant::model::ModelTables;
use tempfile::TempDir;

/// Small IFC4 model in millimetres: two storeys, two doors sharing a name,
/// a window, a beam and a column sharing one quantity set, two spaces of
/// which only the first has quantities.
pub const OFFICE: &str = "ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [ReferenceView]'),'2;1');
FILE_NAME('office.ifc','2024-05-02T10:00:00',(''),(''),'','','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('0Proj',$,'Office Block',$,$,$,$,$,#2);
#2=IFCUNITASSIGNMENT((#3,#4,#5));
#3=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#4=IFCSIUNIT(*,.AREAUNIT.,$,.SQUARE_METRE.);
#5=IFCSIUNIT(*,.VOLUMEUNIT.,$,.CUBIC_METRE.);
#10=IFCBUILDINGSTOREY('0Lvl1',$,'Level 1',$,$,$,$,$,.ELEMENT.,0.);
#11=IFCBUILDINGSTOREY('0Lvl2',$,'Level 2',$,$,$,$,$,.ELEMENT.,3.5);
#20=IFCDOOR('0Door1',$,'Single Flush:100',$,$,$,$,$,2.1,0.9);
#21=IFCDOOR('0Door2',$,'Single Flush:101',$,$,$,$,$,$,$);
#22=IFCWINDOW('0Win1',$,'W1',$,$,$,$,$,1.2,1.5);
#30=IFCBEAM('0Beam1',$,'HEB 200:300',$,$,$,$,$,$);
#31=IFCCOLUMN('0Col1',$,'C30:400',$,$,$,$,$,$);
#40=IFCSPACE('0Sp1',$,'101',$,$,$,$,'Office',.ELEMENT.,$,$);
#41=IFCSPACE('0Sp2',$,'102',$,$,$,$,'Storage',.ELEMENT.,$,$);
#50=IFCRELCONTAINEDINSPATIALSTRUCTURE('0Rel1',$,$,$,(#20,#22,#30),#10);
#51=IFCRELCONTAINEDINSPATIALSTRUCTURE('0Rel2',$,$,$,(#21,#31),#11);
#52=IFCRELAGGREGATES('0Rel3',$,$,$,#10,(#40));
#60=IFCQUANTITYLENGTH('Length',$,$,4.,$);
#61=IFCQUANTITYAREA('CrossSectionArea',$,$,0.0078,$);
#62=IFCQUANTITYAREA('OuterSurfaceArea',$,$,5.1,$);
#63=IFCQUANTITYVOLUME('NetVolume',$,$,2.5,$);
#64=IFCELEMENTQUANTITY('0Qto1',$,'BaseQuantities',$,$,(#60,#61,#62,#63));
#65=IFCRELDEFINESBYPROPERTIES('0Rel4',$,$,$,(#30,#31),#64);
#70=IFCQUANTITYAREA('NetFloorArea',$,$,12.5,$);
#71=IFCQUANTITYLENGTH('Height',$,$,2.8,$);
#72=IFCELEMENTQUANTITY('0Qto2',$,'BaseQuantities',$,$,(#70,#71));
#73=IFCRELDEFINESBYPROPERTIES('0Rel5',$,$,$,(#40),#72);
ENDSEC;
END-ISO-10303-21;
";

/// Writes `content` to a temporary `.ifc` file. Keep the `TempDir` alive
/// for as long as the path is used.
pub fn write_model(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("model.ifc");
    std::fs::write(&path, content).expect("write model");
    (dir, path)
}

pub fn office_tables() -> ModelTables {
    let (_dir, path) = write_model(OFFICE);
    extract_ifc_data(&path).expect("extract office model")
}
