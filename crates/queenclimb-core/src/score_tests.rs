use crate::score::AttackCount;

#[test]
fn test_ordering_lower_is_better() {
    let mut counts = vec![AttackCount::of(3), AttackCount::ZERO, AttackCount::of(15)];
    counts.sort();
    assert_eq!(counts[0], AttackCount::ZERO);
    assert_eq!(counts.iter().min(), Some(&AttackCount::ZERO));
}

#[test]
fn test_max_for() {
    assert_eq!(AttackCount::max_for(6), AttackCount::of(15));
    assert_eq!(AttackCount::max_for(1), AttackCount::ZERO);
    assert_eq!(AttackCount::max_for(0), AttackCount::ZERO);
}

#[test]
fn test_display() {
    assert_eq!(AttackCount::of(7).to_string(), "7");
    assert_eq!(format!("{:?}", AttackCount::of(7)), "AttackCount(7)");
}
