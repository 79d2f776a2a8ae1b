use crate::domain::RegionalLatencies;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;

// Request payload for starting matchmaking.
#[derive(Debug, Deserialize)]
pub struct RequestMatchBody {
    pub latencies: LatencyMillis,
}

// Region -> milliseconds object, decoded in document order.
#[derive(Debug, Default)]
pub struct LatencyMillis(pub RegionalLatencies);

impl<'de> Deserialize<'de> for LatencyMillis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LatencyMillisVisitor;

        impl<'de> Visitor<'de> for LatencyMillisVisitor {
            type Value = LatencyMillis;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of region names to latencies in milliseconds")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut latencies = RegionalLatencies::new();
                while let Some((region, millis)) = map.next_entry::<String, u64>()? {
                    latencies.insert(region, Duration::from_millis(millis));
                }
                Ok(LatencyMillis(latencies))
            }
        }

        deserializer.deserialize_map(LatencyMillisVisitor)
    }
}

#[derive(Debug, Serialize)]
pub struct RequestMatchResponse {
    pub requested: bool,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket_id: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
