use std::collections::BTreeMap;

use crate::types::TemperatureObservation;

/// Location id mapped to its rounded average temperature. The externally
/// visible artifact of an analysis; serializes as a flat JSON object.
pub type ResultSet = BTreeMap<String, f64>;

/// Groups observations by location and averages each group. Rounding is
/// applied exactly once, to the computed mean, never to individual values.
/// Locations with no observations simply never appear in the output.
pub fn aggregate_by_location(
    observations: Vec<TemperatureObservation>,
    decimal_places: u32,
) -> ResultSet {
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for observation in observations {
        grouped
            .entry(observation.location_id)
            .or_default()
            .push(observation.value);
    }

    grouped
        .into_iter()
        .map(|(location_id, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (location_id, round_to(mean, decimal_places))
        })
        .collect()
}

/// Round half away from zero at the given number of decimal places.
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::{aggregate_by_location, round_to};
    use crate::types::TemperatureObservation;

    fn observation(location_id: &str, value: f64) -> TemperatureObservation {
        TemperatureObservation {
            location_id: location_id.to_string(),
            value,
        }
    }

    #[test]
    fn averages_each_location_independently() {
        let result = aggregate_by_location(
            vec![
                observation("LOC001", 20.0),
                observation("LOC001", 21.5),
                observation("LOC002", 18.0),
            ],
            2,
        );
        assert_eq!(result.get("LOC001"), Some(&20.75));
        assert_eq!(result.get("LOC002"), Some(&18.0));
    }

    #[test]
    fn no_observations_means_no_entries() {
        assert!(aggregate_by_location(Vec::new(), 2).is_empty());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 and 12.5 are exactly representable, so these hit the
        // half-way case without float noise
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(20.556, 2), 20.56);
        assert_eq!(round_to(-20.556, 2), -20.56);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [21.0, 18.55, -3.33, 0.13, 100.01] {
            let once = round_to(value, 2);
            assert_eq!(round_to(once, 2), once);
        }
    }
}
