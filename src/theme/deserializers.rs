use serde::{Deserialize, Deserializer, de::Error};

pub fn de_px<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrUint::deserialize(deserializer)? {
        StringOrUint::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<u32>() {
                Ok(pixels) => Ok(pixels),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrUint::Uint(pixels) => Ok(pixels),
    }
}

pub fn de_px_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    de_px(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrUint {
    String(String),
    Uint(u32),
}
