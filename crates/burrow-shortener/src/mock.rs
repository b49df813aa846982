//! Synthetic mappings for populating an instance with demo data.

use burrow_core::MappingRecord;
use rand::distributions::Alphanumeric;
use rand::Rng;

const HOSTS: &[&str] = &["docs", "shop", "news", "blog", "media", "status"];
const OPERATING_SYSTEMS: &[&str] = &["Windows 10", "Mac OSX", "Linux", "Android", "iOS"];
const AGENTS: &[&str] = &["Chrome", "Firefox", "Safari", "Edge", "curl"];
const PATH_LENGTH: usize = 12;

/// Upper bound (inclusive) of the visit count given to a synthetic mapping.
pub const MAX_MOCK_VISITS: u64 = 500;

/// Builds `amount` random records using the thread-local generator.
pub fn mock_records(amount: usize) -> Vec<MappingRecord> {
    let mut rng = rand::thread_rng();
    (0..amount).map(|_| mock_record(&mut rng)).collect()
}

/// Builds one random record.
///
/// Records that were "never visited" carry no client metadata, like real ones.
pub fn mock_record<R: Rng>(rng: &mut R) -> MappingRecord {
    let host = HOSTS[rng.gen_range(0..HOSTS.len())];
    let path: String = (0..PATH_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();

    let mut record = MappingRecord::new(format!("https://{host}.example/{path}"));
    record.count = rng.gen_range(0..=MAX_MOCK_VISITS);
    if record.count > 0 {
        record.os = Some(OPERATING_SYSTEMS[rng.gen_range(0..OPERATING_SYSTEMS.len())].to_string());
        record.device = Some(AGENTS[rng.gen_range(0..AGENTS.len())].to_string());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn records_look_like_real_mappings() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let record = mock_record(&mut rng);
            assert!(record.original_url.starts_with("https://"));
            assert!(record.count <= MAX_MOCK_VISITS);
            assert_eq!(record.os.is_some(), record.count > 0);
            assert_eq!(record.device.is_some(), record.count > 0);
        }
    }

    #[test]
    fn same_seed_same_records() {
        let first = mock_record(&mut StdRng::seed_from_u64(42));
        let second = mock_record(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn mock_records_returns_requested_amount() {
        assert_eq!(mock_records(0).len(), 0);
        assert_eq!(mock_records(17).len(), 17);
    }
}
