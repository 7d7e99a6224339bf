use secrecy::SecretString;

/// Settings for the external cricket-data API.
///
/// The API key is optional: without one the client still issues requests,
/// it just omits the `apikey` query parameter.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct CricketApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<SecretString>,
}
