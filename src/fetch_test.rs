use super::*;

#[test]
fn me_url_joins_base_and_path() {
    let fetch = HttpUserFetch::new("https://api.example.test");
    assert_eq!(fetch.me_url(), "https://api.example.test/api/v1/users/me");
}

#[test]
fn me_url_keeps_port_and_scheme() {
    let fetch = HttpUserFetch::new("http://localhost:8000");
    assert_eq!(fetch.me_url(), "http://localhost:8000/api/v1/users/me");
}
