use crate::string_utils::repeat;
use std::collections::HashMap;
use tera::{Error as TeraError, Value};

/// Create a repeat filter closure for Tera
///
/// # Returns
/// A filter that repeats the input text the number of times given in the
/// "times" named argument. A missing argument leaves the text unchanged.
/// Counts that are negative, do not fit in `usize` or would produce an
/// oversized text are reported as filter errors.
///
/// # Examples
/// ```tera
/// {{ "ab" | repeat(times=3) }} # ababab
/// ```
pub fn create_repeat_filter() -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value, TeraError>
{
    move |value: &Value, args: &HashMap<String, Value>| {
        let text = tera::try_get_value!("repeat", "value", String, value);

        let times = match args.get("times") {
            Some(v) => v
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    TeraError::msg("Filter `repeat` expects a non-negative integer `times`")
                })?,
            None => 1,
        };

        repeat(&text, times)
            .map(Value::String)
            .map_err(|e| TeraError::msg(e.to_string()))
    }
}
