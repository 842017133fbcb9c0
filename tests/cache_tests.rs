//! Cache behaviour. Kept in one test so no other test in this binary can
//! clear the caches mid-way.

use sambat::{ad_to_bs, cache_stats, clear_caches, parse_date, BsDate};

#[test]
fn test_caches_fill_and_clear() {
    clear_caches();
    assert_eq!(cache_stats().dates, 0);

    assert_eq!(ad_to_bs(2024, 2, 6), Ok((2080, 10, 24)));
    assert_eq!(ad_to_bs(2024, 2, 6), Ok((2080, 10, 24)));
    assert_eq!(cache_stats().dates, 1);

    let date = BsDate::new(2080, 10, 24).unwrap();
    date.strftime("%Y-%m-%d").unwrap();
    date.strftime("%Y-%m-%d").unwrap();
    assert_eq!(cache_stats().patterns, 1);

    parse_date("2080-10-24").unwrap();
    assert!(cache_stats().matchers >= 1);

    clear_caches();
    let stats = cache_stats();
    assert_eq!((stats.dates, stats.patterns, stats.matchers), (0, 0, 0));

    // Results are unchanged after clearing.
    assert_eq!(ad_to_bs(2024, 2, 6), Ok((2080, 10, 24)));
}
