use super::*;

#[test]
fn page_param_absent_defaults_to_one() {
    assert_eq!(page_from_query_param(None), 1);
}

#[test]
fn page_param_parses_positive_integers() {
    assert_eq!(page_from_query_param(Some("3")), 3);
    assert_eq!(page_from_query_param(Some("1")), 1);
    assert_eq!(page_from_query_param(Some(" 12 ")), 12);
}

#[test]
fn page_param_clamps_zero_and_negative_to_one() {
    assert_eq!(page_from_query_param(Some("0")), 1);
    assert_eq!(page_from_query_param(Some("-5")), 1);
}

#[test]
fn page_param_non_numeric_defaults_to_one() {
    assert_eq!(page_from_query_param(Some("abc")), 1);
    assert_eq!(page_from_query_param(Some("")), 1);
    assert_eq!(page_from_query_param(Some("2.5")), 1);
    assert_eq!(page_from_query_param(Some("2abc")), 1);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(45, 20), 3);
    assert_eq!(page_count(40, 20), 2);
    assert_eq!(page_count(41, 20), 3);
    assert_eq!(page_count(1, 20), 1);
}

#[test]
fn page_count_zero_rows_is_zero_pages() {
    assert_eq!(page_count(0, 20), 0);
    assert_eq!(page_count(-1, 20), 0);
}

#[test]
fn page_count_guards_bad_page_size() {
    assert_eq!(page_count(45, 0), 0);
}

#[test]
fn page_count_saturates_on_huge_totals() {
    assert_eq!(page_count(i64::MAX, 20), i64::MAX / 20);
}

#[test]
fn page_bounds_first_page_starts_at_zero() {
    assert_eq!(page_bounds(1, PER_PAGE), (0, 20));
}

#[test]
fn page_bounds_advance_by_per_page() {
    assert_eq!(page_bounds(3, PER_PAGE), (40, 20));
    assert_eq!(page_bounds(2, 10), (10, 10));
}

#[test]
fn page_bounds_clamp_sub_one_pages() {
    assert_eq!(page_bounds(0, PER_PAGE), (0, 20));
    assert_eq!(page_bounds(-4, PER_PAGE), (0, 20));
}

#[test]
fn page_bounds_saturate_on_huge_page_indexes() {
    // A raw page param of i64::MAX must not wrap the offset negative.
    let (offset, limit) = page_bounds(i64::MAX, PER_PAGE);
    assert_eq!(offset, i64::MAX);
    assert_eq!(limit, PER_PAGE);
}
