//! Query parameters for `GET /users`.

/// Largest page the list endpoint returns, also the default page size.
pub const MAX_COUNT: i64 = 10;

/// Raw `count` / `start` query values.
///
/// Kept as strings so that unparsable input degrades to a default instead of
/// rejecting the request.
#[derive(Debug, Default)]
pub struct ListParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl ListParams {
    /// Builds parameters from decoded query pairs. A repeated key keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "count" => &mut params.count,
                "start" => &mut params.start,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        params
    }

    /// Converts the parameters to a `(start, count)` window.
    ///
    /// Missing or unparsable values read as `0`. A count outside `1..=10`
    /// becomes 10; a negative start becomes 0.
    pub fn window(&self) -> (i64, i64) {
        let mut count = lenient_int(self.count.as_deref());
        let mut start = lenient_int(self.start.as_deref());

        if !(1..=MAX_COUNT).contains(&count) {
            count = MAX_COUNT;
        }
        if start < 0 {
            start = 0;
        }

        (start, count)
    }
}

fn lenient_int(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
