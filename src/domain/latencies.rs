use std::time::Duration;

// Client-measured round-trip estimates per candidate server region.
// Entries keep the order they were inserted in, so the request parameter
// built from them is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalLatencies {
    entries: Vec<(String, Duration)>,
}

impl RegionalLatencies {
    pub fn new() -> Self {
        Self::default()
    }

    // Insert a region sample; an existing region keeps its position.
    pub fn insert(&mut self, region: impl Into<String>, latency: Duration) {
        let region = region.into();
        match self.entries.iter_mut().find(|(known, _)| *known == region) {
            Some(entry) => entry.1 = latency,
            None => self.entries.push((region, latency)),
        }
    }

    pub fn get(&self, region: &str) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(known, _)| known == region)
            .map(|(_, latency)| *latency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.entries
            .iter()
            .map(|(region, latency)| (region.as_str(), *latency))
    }
}

impl<K> FromIterator<(K, Duration)> for RegionalLatencies
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Duration)>>(iter: I) -> Self {
        let mut latencies = RegionalLatencies::new();
        for (region, latency) in iter {
            latencies.insert(region, latency);
        }
        latencies
    }
}
