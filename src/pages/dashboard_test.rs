use super::*;

#[test]
fn display_date_trims_the_time_component() {
    assert_eq!(display_date("2026-09-01T00:00:00"), "2026-09-01");
    assert_eq!(display_date("2026-09-01"), "2026-09-01");
}

#[test]
fn cost_renders_sub_cent_precision() {
    assert_eq!(format_cost(1.5), "$1.5000");
    assert_eq!(format_cost(0.0037), "$0.0037");
    assert_eq!(format_cost(0.0), "$0.0000");
}
