use phf::phf_map;

// Grade prefix -> school-wide year level.
// P = Prathom (primary), M = Mathayom (secondary).
pub(crate) static YEAR_LEVELS: phf::Map<&'static str, u8> = phf_map! {
    "P1" => 1,
    "P2" => 2,
    "P3" => 3,
    "P4" => 4,
    "P5" => 5,
    "P6" => 6,
    "M1" => 7,
    "M2" => 8,
    "M3" => 9,
};
