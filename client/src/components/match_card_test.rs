use super::*;

#[test]
fn card_style_tilts_with_offset() {
    assert_eq!(card_style(100.0, true), "transform: translateX(100px) rotate(5.0deg); transition: none;");
}

#[test]
fn card_style_animates_on_release() {
    assert_eq!(
        card_style(0.0, false),
        "transform: translateX(0px) rotate(0.0deg); transition: transform 0.3s ease;"
    );
}

#[test]
fn step_photo_wraps_both_ways() {
    assert_eq!(step_photo(0, 3, true), 1);
    assert_eq!(step_photo(2, 3, true), 0);
    assert_eq!(step_photo(0, 3, false), 2);
}

#[test]
fn step_photo_without_images_stays_at_zero() {
    assert_eq!(step_photo(0, 0, true), 0);
    assert_eq!(step_photo(0, 0, false), 0);
}
