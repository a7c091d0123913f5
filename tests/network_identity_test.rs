use reqwest::header::HeaderMap;
use trending_scout::network::identity::IdentityProfile;

#[test]
fn test_desktop_chrome_structure() {
    let profile = IdentityProfile::desktop_chrome();
    assert!(profile.user_agent.contains("Chrome/91.0.4472.124"));
    assert!(profile.user_agent.starts_with("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"));
}

#[test]
fn test_apply_to_headers_integrity() {
    let profile = IdentityProfile::desktop_chrome();
    let mut headers = HeaderMap::new();
    profile.apply_to_headers(&mut headers).unwrap();

    let ua = headers.get("User-Agent").unwrap().to_str().unwrap();
    assert_eq!(ua, profile.user_agent);
    assert_eq!(headers.get("Accept-Language").unwrap(), "en-US,en;q=0.9");
}
