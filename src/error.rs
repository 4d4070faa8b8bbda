use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not find element with id `{id}`")]
    ElementNotFound { id: String },
    #[error("element with id `{id}` is not {expected}")]
    UnexpectedElement { id: String, expected: &'static str },
    #[error("no document available on the global window")]
    MissingDocument,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Config(error.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn names_missing_element() {
        let error = Error::ElementNotFound {
            id: "productSearch".to_string(),
        };
        assert_eq!(
            "could not find element with id `productSearch`",
            error.to_string()
        );
    }

    #[test]
    fn converts_json_errors_to_config_errors() {
        let error: Error = serde_json::from_str::<u32>("\"five\"")
            .expect_err("string should not parse as number")
            .into();
        assert!(matches!(error, Error::Config(_)));
    }
}
