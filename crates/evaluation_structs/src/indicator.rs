use core::fmt;

/// Macroeconomic indicator fetched from the IMF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Consumer price index (inflation)
    Inflation,
    /// Gross domestic product, current prices, national currency
    Gdp,
}

impl Indicator {
    /// All indicators fetched per country, in batch order.
    pub const ALL: [Self; 2] = [Self::Inflation, Self::Gdp];

    /// Attribute name stored on evaluation records.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Inflation => "inflation",
            Self::Gdp => "gdp",
        }
    }

    /// IMF dataset identifier queried for this indicator.
    #[must_use]
    pub const fn dataset_id(self) -> &'static str {
        match self {
            Self::Inflation => "CPI",
            Self::Gdp => "IFS",
        }
    }

    /// IMF series code within the dataset.
    #[must_use]
    pub const fn series_code(self) -> &'static str {
        match self {
            // PCPI_IX = Consumer Price Index
            Self::Inflation => "PCPI_IX",
            // NGDP_XDC = GDP in current prices, national currency
            Self::Gdp => "NGDP_XDC",
        }
    }

    /// Source URL stored on evaluation records for this indicator.
    #[must_use]
    pub const fn source_url(self) -> &'static str {
        match self {
            Self::Inflation => "https://www.imf.org/external/datamapper/datasets/CPI",
            Self::Gdp => "https://www.imf.org/external/datamapper/datasets/IFS",
        }
    }

    /// Provenance note stored on evaluation records.
    #[must_use]
    pub fn note(self, year: i32) -> String {
        match self {
            Self::Inflation => format!("IMF CPI data, year {year}"),
            Self::Gdp => format!("IMF IFS GDP data, year {year}"),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_identifiers() {
        assert_eq!(Indicator::Inflation.dataset_id(), "CPI");
        assert_eq!(Indicator::Inflation.series_code(), "PCPI_IX");
        assert_eq!(Indicator::Gdp.dataset_id(), "IFS");
        assert_eq!(Indicator::Gdp.series_code(), "NGDP_XDC");
    }

    #[test]
    fn test_note_names_dataset_and_year() {
        assert_eq!(Indicator::Inflation.note(2024), "IMF CPI data, year 2024");
        assert_eq!(Indicator::Gdp.note(2023), "IMF IFS GDP data, year 2023");
    }

    #[test]
    fn test_display_matches_attribute() {
        assert_eq!(Indicator::Inflation.to_string(), "inflation");
        assert_eq!(Indicator::Gdp.to_string(), "gdp");
    }
}
