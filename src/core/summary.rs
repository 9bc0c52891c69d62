use crate::domain::model::{PlatformCounts, SearchResult};

pub fn aggregate(results: &[SearchResult]) -> PlatformCounts {
    results.iter().fold(PlatformCounts::new(), |mut counts, result| {
        counts.increment(&result.platform);
        counts
    })
}
