use url::Url;

pub const ECHO_PATH: &str = "echo";

/// Resolves the echo endpoint beneath `base_url`, keeping any path prefix.
pub fn echo_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(ECHO_PATH)
}
