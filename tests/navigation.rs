use europe_map::navigation::{DETAILS_FALLBACK_TITLE, MAP_TITLE};
use europe_map::panels::{DetailsContent, UNKNOWN_COUNTRY};
use europe_map::{Navigator, Route};

#[test]
fn test_starts_on_map() {
    let nav = Navigator::new();
    assert_eq!(nav.current(), &Route::Map);
    assert_eq!(nav.current().title(), MAP_TITLE);
    assert!(!nav.can_go_back());
}

#[test]
fn test_navigate_to_details_and_back() {
    let mut nav = Navigator::new();
    nav.navigate_to_details("Ukraine", Some("ua"));

    assert_eq!(
        nav.current(),
        &Route::CountryDetails {
            name: Some("Ukraine".to_owned()),
            id: Some("ua".to_owned()),
        }
    );
    assert_eq!(nav.current().title(), "Ukraine");
    assert_eq!(nav.depth(), 2);

    assert!(nav.back());
    assert_eq!(nav.current(), &Route::Map);
}

#[test]
fn test_back_never_pops_the_map() {
    let mut nav = Navigator::new();
    assert!(!nav.back());
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current(), &Route::Map);
}

#[test]
fn test_details_title_falls_back_without_name() {
    let route = Route::CountryDetails { name: None, id: None };
    assert_eq!(route.title(), DETAILS_FALLBACK_TITLE);
}

#[test]
fn test_details_content_shows_upper_cased_code() {
    let content = DetailsContent::new(Some("Poland"), Some("pl"));
    assert_eq!(content.heading, "Poland");
    assert_eq!(content.code.as_deref(), Some("PL"));
}

#[test]
fn test_details_content_fallbacks() {
    let content = DetailsContent::new(None, None);
    assert_eq!(content.heading, UNKNOWN_COUNTRY);
    assert_eq!(content.code, None);

    // An empty code is treated as absent
    assert_eq!(DetailsContent::new(Some("Italy"), Some("")).code, None);
}
