use super::*;

#[test]
fn delay_millis_converts_whole_millis() {
    assert_eq!(delay_millis(Duration::from_millis(1000)), 1000);
    assert_eq!(delay_millis(Duration::from_micros(1500)), 1);
}

#[test]
fn delay_millis_clamps_to_u32() {
    assert_eq!(delay_millis(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
}
