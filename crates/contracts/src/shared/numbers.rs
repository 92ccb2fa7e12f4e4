use serde_json::Value;

/// Read a finite number out of loosely-typed authored / stored JSON.
///
/// Accepts JSON numbers and numeric strings (`"800"`, `" 12.5 "`, `"800px"`).
/// NaN, infinities and everything else yield `None`.
pub fn lenient_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            let s = s.strip_suffix("px").unwrap_or(s).trim_end();
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_f64() {
        assert_eq!(lenient_f64(&json!(12.5)), Some(12.5));
        assert_eq!(lenient_f64(&json!(" 800px")), Some(800.0));
        assert_eq!(lenient_f64(&json!("-3")), Some(-3.0));
        assert_eq!(lenient_f64(&json!("NaN")), None);
        assert_eq!(lenient_f64(&json!("inf")), None);
        assert_eq!(lenient_f64(&json!("wide")), None);
        assert_eq!(lenient_f64(&json!(null)), None);
        assert_eq!(lenient_f64(&json!(true)), None);
        assert_eq!(lenient_f64(&json!([1])), None);
    }
}
