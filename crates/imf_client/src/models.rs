//! Response types for the IMF SDMX-JSON CompactData service.
//!
//! The service collapses single-element collections into bare objects, so
//! `Series` and `Obs` are each modeled as one-or-many. Attribute-style
//! fields carry an `@` prefix in the JSON.

use serde::Deserialize;

/// Top-level response from the CompactData endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompactDataResponse {
    #[serde(rename = "CompactData")]
    pub compact_data: CompactData,
}

impl CompactDataResponse {
    /// Flattens the response into the observations of all returned series.
    ///
    /// An absent data set or series yields an empty list.
    #[must_use]
    pub fn into_observations(self) -> Vec<Observation> {
        let Some(data_set) = self.compact_data.data_set else {
            return Vec::new();
        };
        let Some(series) = data_set.series else {
            return Vec::new();
        };

        series
            .into_vec()
            .into_iter()
            .flat_map(|s| s.observations.map_or_else(Vec::new, OneOrMany::into_vec))
            .collect()
    }
}

/// Message body wrapping the data set.
#[derive(Debug, Clone, Deserialize)]
pub struct CompactData {
    #[serde(rename = "DataSet", default)]
    pub data_set: Option<DataSet>,
}

/// Data set holding zero or more series.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSet {
    #[serde(rename = "Series", default)]
    pub series: Option<OneOrMany<Series>>,
}

/// A single time series.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    /// Reporting frequency (e.g. "A", "Q", "M")
    #[serde(rename = "@FREQ", default)]
    pub frequency: Option<String>,

    /// Reference area code (e.g. "USA")
    #[serde(rename = "@REF_AREA", default)]
    pub ref_area: Option<String>,

    /// Indicator code (e.g. "PCPI_IX")
    #[serde(rename = "@INDICATOR", default)]
    pub indicator: Option<String>,

    #[serde(rename = "Obs", default)]
    pub observations: Option<OneOrMany<Observation>>,
}

/// A single time-indexed observation.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    /// Period label (e.g. "2024" or "2024-Q3")
    #[serde(rename = "@TIME_PERIOD")]
    pub time_period: String,

    /// Observation value; omitted for reported gaps
    #[serde(rename = "@OBS_VALUE", default)]
    pub value: Option<String>,
}

/// A JSON value that is either a bare object or an array of objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Converts into a vector, wrapping the single-element case.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_series_single_observation() {
        let json = r#"{
            "CompactData": {
                "DataSet": {
                    "Series": {
                        "@FREQ": "A",
                        "@REF_AREA": "USA",
                        "@INDICATOR": "PCPI_IX",
                        "Obs": {"@TIME_PERIOD": "2024", "@OBS_VALUE": "313.689"}
                    }
                }
            }
        }"#;

        let response: CompactDataResponse = serde_json::from_str(json).unwrap();
        let observations = response.into_observations();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].time_period, "2024");
        assert_eq!(observations[0].value.as_deref(), Some("313.689"));
    }

    #[test]
    fn test_observation_array() {
        let json = r#"{
            "CompactData": {
                "DataSet": {
                    "Series": {
                        "Obs": [
                            {"@TIME_PERIOD": "2022", "@OBS_VALUE": "292.655"},
                            {"@TIME_PERIOD": "2023", "@OBS_VALUE": "304.702"},
                            {"@TIME_PERIOD": "2024"}
                        ]
                    }
                }
            }
        }"#;

        let response: CompactDataResponse = serde_json::from_str(json).unwrap();
        let observations = response.into_observations();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[2].time_period, "2024");
        assert_eq!(observations[2].value, None);
    }

    #[test]
    fn test_series_array_is_flattened() {
        let json = r#"{
            "CompactData": {
                "DataSet": {
                    "Series": [
                        {"Obs": {"@TIME_PERIOD": "2023-Q4", "@OBS_VALUE": "1.5"}},
                        {"Obs": {"@TIME_PERIOD": "2024-Q1", "@OBS_VALUE": "1.6"}}
                    ]
                }
            }
        }"#;

        let response: CompactDataResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_observations().len(), 2);
    }

    #[test]
    fn test_empty_result_shapes() {
        let no_series: CompactDataResponse =
            serde_json::from_str(r#"{"CompactData": {"DataSet": {}}}"#).unwrap();
        assert!(no_series.into_observations().is_empty());

        let no_data_set: CompactDataResponse =
            serde_json::from_str(r#"{"CompactData": {}}"#).unwrap();
        assert!(no_data_set.into_observations().is_empty());
    }
}
