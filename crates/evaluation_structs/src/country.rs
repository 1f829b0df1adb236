/// Country codes fetched by default.
///
/// `GBR` has no entry in the canonical name table and is skipped with a
/// warning by the batch driver.
pub const DEFAULT_COUNTRIES: [&str; 5] = ["USA", "CAN", "DEU", "JPN", "GBR"];

/// Maps an IMF country code to its canonical entity name.
///
/// Returns `None` for codes outside the supported set.
#[must_use]
pub fn country_name(code: &str) -> Option<&'static str> {
    // IMF ISO alpha-3 codes for the 48 tracked countries
    match code {
        "ARG" => Some("Argentina"),
        "AUS" => Some("Australia"),
        "AUT" => Some("Austria"),
        "BGD" => Some("Bangladesh"),
        "BEL" => Some("Belgium"),
        "BRA" => Some("Brazil"),
        "CAN" => Some("Canada"),
        "CHL" => Some("Chile"),
        "COL" => Some("Colombia"),
        "CZE" => Some("Czech Republic"),
        "DNK" => Some("Denmark"),
        "EGY" => Some("Egypt"),
        "FIN" => Some("Finland"),
        "FRA" => Some("France"),
        "DEU" => Some("Germany"),
        "GRC" => Some("Greece"),
        "HUN" => Some("Hungary"),
        "IND" => Some("India"),
        "IDN" => Some("Indonesia"),
        "IRL" => Some("Ireland"),
        "ISR" => Some("Israel"),
        "ITA" => Some("Italy"),
        "JPN" => Some("Japan"),
        "NLD" => Some("Kingdom of the Netherlands"),
        "MYS" => Some("Malaysia"),
        "MEX" => Some("Mexico"),
        "NZL" => Some("New Zealand"),
        "NGA" => Some("Nigeria"),
        "NOR" => Some("Norway"),
        "PAK" => Some("Pakistan"),
        "PRY" => Some("Paraguay"),
        "CHN" => Some("People's Republic of China"),
        "PHL" => Some("Philippines"),
        "POL" => Some("Poland"),
        "PRT" => Some("Portugal"),
        "ROU" => Some("Romania"),
        "RUS" => Some("Russia"),
        "SAU" => Some("Saudi Arabia"),
        "SGP" => Some("Singapore"),
        "ZAF" => Some("South Africa"),
        "KOR" => Some("South Korea"),
        "ESP" => Some("Spain"),
        "SWE" => Some("Sweden"),
        "CHE" => Some("Switzerland"),
        "THA" => Some("Thailand"),
        "TUR" => Some("Turkey"),
        "USA" => Some("United States"),
        "VNM" => Some("Vietnam"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(country_name("USA"), Some("United States"));
        assert_eq!(country_name("DEU"), Some("Germany"));
        assert_eq!(country_name("NLD"), Some("Kingdom of the Netherlands"));
        assert_eq!(country_name("CHN"), Some("People's Republic of China"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(country_name("GBR"), None);
        assert_eq!(country_name("XX"), None);
        assert_eq!(country_name(""), None);
    }

    #[test]
    fn test_default_list_contains_one_unmapped_code() {
        let unmapped: Vec<_> = DEFAULT_COUNTRIES
            .iter()
            .filter(|code| country_name(code).is_none())
            .collect();
        assert_eq!(unmapped, vec![&"GBR"]);
    }
}
