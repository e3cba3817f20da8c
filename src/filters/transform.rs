use std::collections::HashMap;
use tera::{Error as TeraError, Value};

use crate::error::{Error, Result};
use crate::transforms::TransformManager;

/// Create a filter closure for Tera backed by a registered transform
///
/// # Arguments
/// * `name` - The name of the transform in the global registry
///
/// # Returns
/// A closure that can be used with Tera's register_filter, or
/// `Error::UnknownTransform` if no transform is registered under `name`
///
/// # Examples
/// ```tera
/// {{ first_name | rot13 }}
/// {{ tag | unbracket }}
/// ```
pub fn create_transform_filter(
    name: &str,
) -> Result<impl Fn(&Value, &HashMap<String, Value>) -> std::result::Result<Value, TeraError>> {
    let filter_name = name.to_string();
    let transform = TransformManager::get()
        .get_transform(name)
        .cloned()
        .ok_or_else(|| Error::UnknownTransform(name.to_string()))?;

    Ok(move |value: &Value, _args: &HashMap<String, Value>| {
        let text = tera::try_get_value!(filter_name, "value", String, value);
        transform
            .transform(&text)
            .map(Value::String)
            .map_err(|e| TeraError::msg(e.to_string()))
    })
}
