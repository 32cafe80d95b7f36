//! Registry of draft sets with usable 17lands data.

use serde::Serialize;

/// A draft set the trainer supports, with the window its data covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedSet {
    pub code: &'static str,
    pub name: &'static str,
    pub release_date: &'static str,
    pub data_start_date: &'static str,
    pub data_end_date: &'static str,
}

/// Default set for new sessions.
pub const DEFAULT_SET: &str = "LWE";

/// How many pairs to generate ahead of the one on screen.
pub const PRELOAD_PAIR_COUNT: usize = 3;

pub const SUPPORTED_SETS: &[SupportedSet] = &[
    // 2026
    SupportedSet { code: "LWE", name: "Lorwyn Eclipse", release_date: "2026-01-17", data_start_date: "2026-01-10", data_end_date: "2026-04-01" },
    // 2025
    SupportedSet { code: "TBD", name: "Tarkir: Dragonstorm", release_date: "2025-11-07", data_start_date: "2025-10-31", data_end_date: "2026-01-17" },
    SupportedSet { code: "DFT", name: "Duskmourn: Fractures", release_date: "2025-06-20", data_start_date: "2025-06-13", data_end_date: "2025-11-07" },
    SupportedSet { code: "AKR", name: "Amonkhet Remastered", release_date: "2025-04-25", data_start_date: "2025-04-18", data_end_date: "2025-06-20" },
    SupportedSet { code: "AET", name: "Aetherdrift", release_date: "2025-02-14", data_start_date: "2025-02-07", data_end_date: "2025-04-25" },
    // 2024
    SupportedSet { code: "FDN", name: "Foundations", release_date: "2024-11-15", data_start_date: "2024-11-08", data_end_date: "2025-02-14" },
    SupportedSet { code: "DSK", name: "Duskmourn: House of Horror", release_date: "2024-09-27", data_start_date: "2024-09-20", data_end_date: "2024-11-15" },
    SupportedSet { code: "BLB", name: "Bloomburrow", release_date: "2024-08-02", data_start_date: "2024-07-30", data_end_date: "2024-09-27" },
    SupportedSet { code: "OTJ", name: "Outlaws of Thunder Junction", release_date: "2024-04-19", data_start_date: "2024-04-12", data_end_date: "2024-08-02" },
    SupportedSet { code: "MKM", name: "Murders at Karlov Manor", release_date: "2024-02-09", data_start_date: "2024-02-02", data_end_date: "2024-04-19" },
    // 2023
    SupportedSet { code: "LCI", name: "Lost Caverns of Ixalan", release_date: "2023-11-14", data_start_date: "2023-11-07", data_end_date: "2024-02-09" },
    SupportedSet { code: "WOE", name: "Wilds of Eldraine", release_date: "2023-09-08", data_start_date: "2023-09-01", data_end_date: "2023-11-14" },
    SupportedSet { code: "LTR", name: "The Lord of the Rings: Tales of Middle-earth", release_date: "2023-06-23", data_start_date: "2023-06-20", data_end_date: "2023-09-08" },
    SupportedSet { code: "MOM", name: "March of the Machine", release_date: "2023-04-21", data_start_date: "2023-04-18", data_end_date: "2023-06-23" },
    SupportedSet { code: "MAT", name: "March of the Machine: The Aftermath", release_date: "2023-05-12", data_start_date: "2023-05-09", data_end_date: "2023-06-23" },
    SupportedSet { code: "ONE", name: "Phyrexia: All Will Be One", release_date: "2023-02-10", data_start_date: "2023-02-07", data_end_date: "2023-04-21" },
    // 2022
    SupportedSet { code: "BRO", name: "The Brothers' War", release_date: "2022-11-18", data_start_date: "2022-11-15", data_end_date: "2023-02-10" },
    SupportedSet { code: "DMU", name: "Dominaria United", release_date: "2022-09-09", data_start_date: "2022-09-01", data_end_date: "2022-11-18" },
    SupportedSet { code: "SNC", name: "Streets of New Capenna", release_date: "2022-04-29", data_start_date: "2022-04-28", data_end_date: "2022-09-09" },
    SupportedSet { code: "NEO", name: "Kamigawa: Neon Dynasty", release_date: "2022-02-18", data_start_date: "2022-02-10", data_end_date: "2022-04-29" },
    SupportedSet { code: "VOW", name: "Innistrad: Crimson Vow", release_date: "2021-11-19", data_start_date: "2021-11-11", data_end_date: "2022-02-18" },
    SupportedSet { code: "MID", name: "Innistrad: Midnight Hunt", release_date: "2021-09-24", data_start_date: "2021-09-16", data_end_date: "2021-11-19" },
    // 2021
    SupportedSet { code: "AFR", name: "Adventures in the Forgotten Realms", release_date: "2021-07-23", data_start_date: "2021-07-08", data_end_date: "2021-09-24" },
    SupportedSet { code: "STX", name: "Strixhaven: School of Mages", release_date: "2021-04-23", data_start_date: "2021-04-15", data_end_date: "2021-07-23" },
    SupportedSet { code: "KHM", name: "Kaldheim", release_date: "2021-02-05", data_start_date: "2021-01-28", data_end_date: "2021-04-23" },
    // 2020
    SupportedSet { code: "ZNR", name: "Zendikar Rising", release_date: "2020-09-25", data_start_date: "2020-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "IKO", name: "Ikoria: Lair of Behemoths", release_date: "2020-04-24", data_start_date: "2020-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "THB", name: "Theros Beyond Death", release_date: "2020-01-24", data_start_date: "2020-01-01", data_end_date: "2025-12-31" },
    // 2019
    SupportedSet { code: "ELD", name: "Throne of Eldraine", release_date: "2019-10-04", data_start_date: "2019-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "M20", name: "Core Set 2020", release_date: "2019-07-12", data_start_date: "2019-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "WAR", name: "War of the Spark", release_date: "2019-05-03", data_start_date: "2019-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "RNA", name: "Ravnica Allegiance", release_date: "2019-01-25", data_start_date: "2019-01-01", data_end_date: "2025-12-31" },
    SupportedSet { code: "GRN", name: "Guilds of Ravnica", release_date: "2018-10-05", data_start_date: "2018-01-01", data_end_date: "2025-12-31" },
    // Historic sets with data
    SupportedSet { code: "DOM", name: "Dominaria", release_date: "2018-04-27", data_start_date: "2018-01-01", data_end_date: "2025-12-31" },
];

/// Look up a set by its code.
pub fn find_set(code: &str) -> Option<&'static SupportedSet> {
    SUPPORTED_SETS.iter().find(|s| s.code == code)
}

/// Whether a set code is in the registry.
pub fn is_supported(code: &str) -> bool {
    find_set(code).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_set_is_registered() {
        assert!(is_supported(DEFAULT_SET));
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(find_set("DSK").unwrap().name, "Duskmourn: House of Horror");
        assert!(find_set("XYZ").is_none());
    }

    #[test]
    fn set_codes_are_unique() {
        let codes: HashSet<&str> = SUPPORTED_SETS.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), SUPPORTED_SETS.len());
    }
}
