// Static directory of the region codes the allocation service emits.
//
// Codes map to a display name for tables and to the ISO 3166-2 key used by
// the India states boundary file. A handful of service codes differ from
// their ISO subdivision code (CG, TS, UK).
use once_cell::sync::Lazy;
use std::collections::HashMap;

struct RegionInfo {
    name: &'static str,
    iso: &'static str,
}

const REGIONS: &[(&str, RegionInfo)] = &[
    ("AP", RegionInfo { name: "Andhra Pradesh", iso: "IN-AP" }),
    ("AR", RegionInfo { name: "Arunachal Pradesh", iso: "IN-AR" }),
    ("AS", RegionInfo { name: "Assam", iso: "IN-AS" }),
    ("BR", RegionInfo { name: "Bihar", iso: "IN-BR" }),
    ("CG", RegionInfo { name: "Chhattisgarh", iso: "IN-CT" }),
    ("GA", RegionInfo { name: "Goa", iso: "IN-GA" }),
    ("GJ", RegionInfo { name: "Gujarat", iso: "IN-GJ" }),
    ("HR", RegionInfo { name: "Haryana", iso: "IN-HR" }),
    ("HP", RegionInfo { name: "Himachal Pradesh", iso: "IN-HP" }),
    ("JH", RegionInfo { name: "Jharkhand", iso: "IN-JH" }),
    ("KA", RegionInfo { name: "Karnataka", iso: "IN-KA" }),
    ("KL", RegionInfo { name: "Kerala", iso: "IN-KL" }),
    ("MP", RegionInfo { name: "Madhya Pradesh", iso: "IN-MP" }),
    ("MH", RegionInfo { name: "Maharashtra", iso: "IN-MH" }),
    ("MN", RegionInfo { name: "Manipur", iso: "IN-MN" }),
    ("ML", RegionInfo { name: "Meghalaya", iso: "IN-ML" }),
    ("MZ", RegionInfo { name: "Mizoram", iso: "IN-MZ" }),
    ("NL", RegionInfo { name: "Nagaland", iso: "IN-NL" }),
    ("OR", RegionInfo { name: "Odisha", iso: "IN-OR" }),
    ("PB", RegionInfo { name: "Punjab", iso: "IN-PB" }),
    ("RJ", RegionInfo { name: "Rajasthan", iso: "IN-RJ" }),
    ("SK", RegionInfo { name: "Sikkim", iso: "IN-SK" }),
    ("TN", RegionInfo { name: "Tamil Nadu", iso: "IN-TN" }),
    ("TS", RegionInfo { name: "Telangana", iso: "IN-TG" }),
    ("TR", RegionInfo { name: "Tripura", iso: "IN-TR" }),
    ("UP", RegionInfo { name: "Uttar Pradesh", iso: "IN-UP" }),
    ("UK", RegionInfo { name: "Uttarakhand", iso: "IN-UT" }),
    ("WB", RegionInfo { name: "West Bengal", iso: "IN-WB" }),
    ("AN", RegionInfo { name: "Andaman and Nicobar", iso: "IN-AN" }),
    ("CH", RegionInfo { name: "Chandigarh", iso: "IN-CH" }),
    ("DH", RegionInfo { name: "Dadra and Nagar Haveli and Daman and Diu", iso: "IN-DH" }),
    ("DL", RegionInfo { name: "Delhi", iso: "IN-DL" }),
    ("JK", RegionInfo { name: "Jammu and Kashmir", iso: "IN-JK" }),
    ("LA", RegionInfo { name: "Ladakh", iso: "IN-LA" }),
    ("LD", RegionInfo { name: "Lakshadweep", iso: "IN-LD" }),
    ("PY", RegionInfo { name: "Puducherry", iso: "IN-PY" }),
];

static DIRECTORY: Lazy<HashMap<&'static str, &'static RegionInfo>> =
    Lazy::new(|| REGIONS.iter().map(|(code, info)| (*code, info)).collect());

/// Human-readable name, or the code itself for unknown regions.
pub fn display_name(code: &str) -> &str {
    DIRECTORY.get(code).map(|r| r.name).unwrap_or(code)
}

/// ISO 3166-2 boundary key, or the code itself for unknown regions.
pub fn iso_code(code: &str) -> String {
    DIRECTORY
        .get(code)
        .map(|r| r.iso.to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(display_name("MH"), "Maharashtra");
        assert_eq!(iso_code("DL"), "IN-DL");
    }

    #[test]
    fn service_codes_that_differ_from_iso() {
        assert_eq!(iso_code("CG"), "IN-CT");
        assert_eq!(iso_code("TS"), "IN-TG");
        assert_eq!(iso_code("UK"), "IN-UT");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(display_name("ZZ"), "ZZ");
        assert_eq!(iso_code("ZZ"), "ZZ");
    }

    #[test]
    fn directory_has_no_duplicate_codes() {
        assert_eq!(DIRECTORY.len(), REGIONS.len());
    }
}
