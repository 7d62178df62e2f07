#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn orders_thai_consonant_initial_names() {
    // ก < ข < ส in both code-point and dictionary order.
    assert_eq!(compare_names("กานดา", "ขวัญใจ"), Ordering::Less);
    assert_eq!(compare_names("ขวัญใจ", "สมชาย"), Ordering::Less);
    assert_eq!(compare_names("สมชาย", "กานดา"), Ordering::Greater);
}

#[test]
fn equal_names_compare_equal() {
    assert_eq!(compare_names("สมชาย", "สมชาย"), Ordering::Equal);
}

#[test]
fn sorts_a_name_list_ascending() {
    let mut names = vec!["สมชาย", "กานดา", "ขวัญใจ"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, ["กานดา", "ขวัญใจ", "สมชาย"]);
}
