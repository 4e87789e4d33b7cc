//! Group-by partitioning and per-group reductions.
//!
//! Groups preserve the order in which their keys first appear in the input.
//! That order is what makes downstream ranking tie-breaks reproducible, so
//! it is part of the contract here, not an implementation detail.

use std::collections::HashMap;
use std::hash::Hash;

use crate::observation::Observation;
use crate::stats;

/// Partitions observations by a derived key.
///
/// Returns one `(key, members)` entry per distinct key, in order of first
/// appearance. Members keep their relative input order. An empty input
/// yields an empty partition; every returned group has at least one member.
pub fn group_by<'a, K, F>(
    observations: &'a [Observation],
    key: F,
) -> Vec<(K, Vec<&'a Observation>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Observation) -> K,
{
    let mut slot: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Observation>)> = Vec::new();

    for obs in observations {
        let k = key(obs);
        match slot.get(&k) {
            Some(&i) => groups[i].1.push(obs),
            None => {
                slot.insert(k.clone(), groups.len());
                groups.push((k, vec![obs]));
            }
        }
    }

    groups
}

/// Arithmetic mean of a chosen field per group, keys in first-seen order.
pub fn grouped_mean<K, F, V>(observations: &[Observation], key: F, value: V) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Observation) -> K,
    V: Fn(&Observation) -> f64,
{
    group_by(observations, key)
        .into_iter()
        .map(|(k, members)| {
            let values: Vec<f64> = members.iter().map(|o| value(o)).collect();
            (k, stats::mean(&values))
        })
        .collect()
}

/// Sum of a chosen field per group, keys in first-seen order.
pub fn grouped_sum<K, F, V>(observations: &[Observation], key: F, value: V) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Observation) -> K,
    V: Fn(&Observation) -> f64,
{
    group_by(observations, key)
        .into_iter()
        .map(|(k, members)| (k, members.iter().map(|o| value(o)).sum()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn obs(station: &str, temperature: f64, precipitation: f64) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            station,
            "",
            temperature,
            50.0,
            3.0,
            precipitation,
        )
    }

    #[test]
    fn keys_in_first_seen_order() {
        let observations = vec![
            obs("Berlin", 18.0, 0.0),
            obs("Paris", 21.0, 0.0),
            obs("Berlin", 20.0, 0.0),
            obs("London", 15.0, 0.0),
        ];

        let groups = group_by(&observations, |o| o.station_id.clone());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Berlin", "Paris", "London"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn members_keep_input_order() {
        let observations = vec![
            obs("Berlin", 18.0, 0.0),
            obs("Paris", 21.0, 0.0),
            obs("Berlin", 20.0, 0.0),
        ];

        let groups = group_by(&observations, |o| o.station_id.clone());
        let berlin: Vec<f64> = groups[0].1.iter().map(|o| o.temperature).collect();
        assert_eq!(berlin, vec![18.0, 20.0]);
    }

    #[test]
    fn empty_input_yields_empty_partition() {
        let groups = group_by(&[], |o: &Observation| o.station_id.clone());
        assert!(groups.is_empty());
    }

    #[test]
    fn mean_matches_direct_computation() {
        let observations = vec![
            obs("Berlin", 18.0, 0.0),
            obs("Berlin", 20.0, 0.0),
            obs("Berlin", 25.0, 0.0),
            obs("Paris", 10.0, 0.0),
        ];

        let means = grouped_mean(&observations, |o| o.station_id.clone(), |o| o.temperature);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].0, "Berlin");
        assert_relative_eq!(means[0].1, (18.0 + 20.0 + 25.0) / 3.0, epsilon = 1e-12);
        assert_relative_eq!(means[1].1, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn sum_accumulates_per_group() {
        let observations = vec![
            obs("Berlin", 18.0, 1.5),
            obs("Paris", 21.0, 0.0),
            obs("Berlin", 20.0, 2.5),
        ];

        let sums = grouped_sum(&observations, |o| o.station_id.clone(), |o| o.precipitation);
        assert_eq!(sums[0].0, "Berlin");
        assert_relative_eq!(sums[0].1, 4.0, epsilon = 1e-12);
        assert_relative_eq!(sums[1].1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn grouping_by_month() {
        let jan = Observation::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "Berlin",
            "",
            2.0,
            70.0,
            5.0,
            0.0,
        );
        let feb = Observation::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "Berlin",
            "",
            4.0,
            65.0,
            6.0,
            0.0,
        );
        let observations = [jan, feb];
        let groups = group_by(&observations, |o| o.month());
        let keys: Vec<u8> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2]);
    }
}
