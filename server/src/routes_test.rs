use super::*;

// --- healthz ---

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

// --- pkg_dir ---

#[test]
fn pkg_dir_appends_pkg_to_the_site_root() {
    assert_eq!(
        pkg_dir(Path::new("target/site")),
        PathBuf::from("target/site/pkg")
    );
}

#[test]
fn pkg_dir_handles_a_bare_root() {
    assert_eq!(pkg_dir(Path::new(".")), PathBuf::from("./pkg"));
}
