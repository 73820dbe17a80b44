use crate::Result;
use std::env;

pub struct Conf {
    pub publisher_id: String,
    pub access_token: String,
    pub filter_countries: Vec<String>,
}

const PUBLISHER_ID_VAR: &str = "ADMOB_PUBLISHER_ID";
const ACCESS_TOKEN_VAR: &str = "ADMOB_ACCESS_TOKEN";
const FILTER_COUNTRIES_VAR: &str = "ADMOB_FILTER_COUNTRIES";

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Ok(Conf {
            publisher_id: require(PUBLISHER_ID_VAR)?,
            access_token: require(ACCESS_TOKEN_VAR)?,
            filter_countries: env::var(FILTER_COUNTRIES_VAR)
                .map(|it| parse_countries(&it))
                .unwrap_or_default(),
        })
    }
}

fn require(var: &str) -> Result<String> {
    let value = env::var(var).unwrap_or_default();
    if value.is_empty() {
        Err(format!("{var} is not set"))?
    }
    Ok(value)
}

fn parse_countries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|it| it.trim().to_uppercase())
        .filter(|it| !it.is_empty())
        .collect()
}
