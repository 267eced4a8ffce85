//! Shared fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use ppinet::{Table, TableFormat};

/// STRING protein info: four seed genes and one bystander.
pub const STRING_INFO: &str = "\
#string_protein_id\tpreferred_name\tprotein_size
9606.ENSP01\tBRCA1\t1863
9606.ENSP02\tTP53\t393
9606.ENSP03\tATM\t3056
9606.ENSP04\tXYZ1\t120
9606.ENSP05\tPTEN\t403
";

/// STRING links: a reversed duplicate, one link under threshold, one to a
/// non-seed protein and a self-loop.
pub const STRING_LINKS: &str = "\
protein1 protein2 combined_score
9606.ENSP01 9606.ENSP02 900
9606.ENSP02 9606.ENSP01 900
9606.ENSP01 9606.ENSP03 800
9606.ENSP02 9606.ENSP03 650
9606.ENSP01 9606.ENSP04 999
9606.ENSP03 9606.ENSP05 701
9606.ENSP05 9606.ENSP05 950
9606.ENSP03 9606.ENSP02 700
";

/// Write `body` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

/// Build a table from string literals.
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut t = Table::new("fixture", headers.iter().map(|s| s.to_string()).collect());
    for r in rows {
        t.push_row(r.iter().map(|s| s.to_string()).collect());
    }
    t
}

/// Read a CSV file back.
pub fn read_csv(path: &Path) -> Table {
    Table::read(path, TableFormat::CSV).unwrap()
}
